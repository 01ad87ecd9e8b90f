// Early return on `Err`, without the `From` conversion performed by `?`. Every
// error in this crate is already a `crate::Error`, and skipping the
// conversion keeps the generated code of the limb loops small.
macro_rules! tri {
    ($e:expr $(,)?) => {
        match $e {
            core::result::Result::Ok(val) => val,
            core::result::Result::Err(err) => return core::result::Result::Err(err),
        }
    };
}
