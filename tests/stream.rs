use decimal_bigint::read::{Read, SliceRead};
use decimal_bigint::{BigInt, Parser, StreamParser};
use indoc::indoc;

// Rustfmt issue https://github.com/rust-lang-nursery/rustfmt/issues/2740
#[rustfmt::skip]
macro_rules! test_stream {
    ($data:expr, |$stream:ident| $test:block) => {
        {
            let de = Parser::from_str($data);
            let mut $stream = de.into_iter();
            assert_eq!($stream.byte_offset(), 0);
            $test
        }
        {
            let de = Parser::from_slice($data.as_bytes());
            let mut $stream = de.into_iter();
            assert_eq!($stream.byte_offset(), 0);
            $test
        }
        {
            let mut bytes = $data.as_bytes();
            let de = Parser::from_reader(&mut bytes);
            let mut $stream = de.into_iter();
            assert_eq!($stream.byte_offset(), 0);
            $test
        }
    };
}

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn test_stream_newlines() {
    let data = indoc! {"
        12 -7
        +100000
        123456789012345678901234567890
    "};

    test_stream!(data, |stream| {
        assert_eq!(stream.next().unwrap().unwrap(), big("12"));
        assert_eq!(stream.byte_offset(), 2);

        assert_eq!(stream.next().unwrap().unwrap(), big("-7"));
        assert_eq!(stream.byte_offset(), 5);

        assert_eq!(stream.next().unwrap().unwrap(), big("100000"));
        assert_eq!(stream.byte_offset(), 13);

        assert_eq!(
            stream.next().unwrap().unwrap(),
            big("123456789012345678901234567890"),
        );
        assert_eq!(stream.byte_offset(), 44);

        assert!(stream.next().is_none());
        assert_eq!(stream.byte_offset(), 45);
    });
}

#[test]
fn test_stream_all_whitespace_kinds() {
    let data = "\t1\x0B2\x0C3\r\n4 ";

    test_stream!(data, |stream| {
        let values: Vec<BigInt> = stream.by_ref().map(Result::unwrap).collect();
        assert_eq!(values, [big("1"), big("2"), big("3"), big("4")]);
        assert_eq!(stream.byte_offset(), 10);
    });
}

#[test]
fn test_stream_empty() {
    test_stream!("", |stream| {
        assert!(stream.next().is_none());
        assert_eq!(stream.byte_offset(), 0);
    });

    test_stream!(" \n\t ", |stream| {
        assert!(stream.next().is_none());
        assert_eq!(stream.byte_offset(), 4);
    });
}

#[test]
fn test_stream_invalid_token() {
    let data = indoc! {"
        1 2
        3x 4
    "};

    test_stream!(data, |stream| {
        assert_eq!(stream.next().unwrap().unwrap(), big("1"));
        assert_eq!(stream.next().unwrap().unwrap(), big("2"));

        let err = stream.next().unwrap().unwrap_err();
        assert!(err.is_syntax());
        assert_eq!((err.line(), err.column()), (2, 2));
        assert_eq!(err.to_string(), "invalid number at line 2 column 2");

        // The stream is fused after an error.
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    });
}

#[test]
fn test_stream_lone_sign() {
    test_stream!("5 - 6", |stream| {
        assert_eq!(stream.next().unwrap().unwrap(), big("5"));

        let err = stream.next().unwrap().unwrap_err();
        assert!(err.is_syntax());
        assert_eq!(err.column(), 4);
        assert!(stream.next().is_none());
    });

    test_stream!("5 -", |stream| {
        assert_eq!(stream.next().unwrap().unwrap(), big("5"));
        assert!(stream.next().unwrap().unwrap_err().is_syntax());
    });
}

#[test]
fn test_parse_bigint_and_end() {
    let mut parser = Parser::from_str(" 1 2 ");
    assert_eq!(parser.parse_bigint().unwrap(), big("1"));
    assert!(parser.end().is_err());
    assert_eq!(parser.parse_bigint().unwrap(), big("2"));
    parser.end().unwrap();

    let err = parser.parse_bigint().unwrap_err();
    assert!(err.is_eof());
}

// Generic over any byte source; the parser never borrows from its input, so
// values outlive the buffer they were read from.
fn read_all<R: Read>(stream: StreamParser<R>) -> Vec<BigInt> {
    stream.map(Result::unwrap).collect()
}

#[test]
fn test_values_outlive_input() {
    let values = {
        let data = String::from("7 -8 90000000000");
        let from_slice = read_all(StreamParser::new(SliceRead::new(data.as_bytes())));
        let from_str = read_all(Parser::from_str(&data).into_iter());
        assert_eq!(from_slice, from_str);
        from_slice
    };
    assert_eq!(values, [big("7"), big("-8"), big("90000000000")]);
}
