// crates/sane-protocol/tests/wire_regression.rs
use std::io;

use sane_core::{ControlAction, RpcCode, SaneWord, ValueType, WireEnum};
use sane_protocol::script::{compile, compile_into, format_hex};
use sane_protocol::wire_types::{text_wire_len, version_code, CLIENT_VERSION};
use sane_protocol::{SaneOutputStream, WireError};

const SESSION_SCRIPT: &str = include_str!("data/session.script");
const SESSION_HEX: &str = include_str!("data/session.hex");

#[test]
fn session_script_matches_reference_bytes() {
    let bytes = compile(SESSION_SCRIPT).expect("script should compile");
    assert_eq!(format_hex(&bytes), SESSION_HEX.trim_end());
}

#[test]
fn script_and_typed_api_agree() {
    // The first request of the session, written through the typed API.
    let (major, minor, build) = CLIENT_VERSION;
    let mut out = SaneOutputStream::new(Vec::new());
    out.write_enum(&RpcCode::Init).unwrap();
    out.write_word(version_code(major, minor, build)).unwrap();
    out.write_text("scanuser").unwrap();
    let typed = out.into_inner().unwrap();

    let scripted = compile("enum rpc:init\nversion 1.0.3\ntext scanuser").unwrap();
    assert_eq!(typed, scripted);
}

#[test]
fn control_option_request_layout() {
    let mut out = SaneOutputStream::with_capacity(16, Vec::new());
    out.write_enum(&RpcCode::ControlOption).unwrap();
    out.write_word(SaneWord::for_int(0)).unwrap();
    out.write_word(SaneWord::for_int(3)).unwrap();
    out.write_enum(&ControlAction::SetValue).unwrap();
    out.write_enum(&ValueType::Integer).unwrap();
    out.write_word(SaneWord::for_int(4)).unwrap();
    out.write_word(SaneWord::for_int(1)).unwrap();
    out.write_word(SaneWord::for_int(300)).unwrap();
    let bytes = out.into_inner().unwrap();

    let words: Vec<i32> = bytes
        .chunks(4)
        .map(|c| i32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    assert_eq!(
        words,
        vec![RpcCode::ControlOption.wire_code(), 0, 3, 1, 1, 4, 1, 300]
    );
}

/// Walk a text field the way a peer would: length word, payload, terminator.
fn read_text(bytes: &[u8]) -> (Vec<u8>, usize) {
    if bytes[0] == 0 && bytes.len() == 1 {
        return (Vec::new(), 1);
    }
    let len = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
    let payload = bytes[4..4 + len - 1].to_vec();
    assert_eq!(bytes[4 + len - 1], 0, "terminator expected at the end of the field");
    (payload, 4 + len)
}

#[test]
fn text_fields_parse_back_for_many_inputs() {
    let long = "x".repeat(300);
    let inputs: [&str; 6] = [
        "a",
        "ab",
        "hello world",
        "Ünïcödé lätin",
        "tab\there",
        long.as_str(),
    ];

    for input in inputs {
        let mut out = SaneOutputStream::new(Vec::new());
        out.write_text(input).unwrap();
        let bytes = out.into_inner().unwrap();

        let expected: Vec<u8> = input.chars().map(|c| c as u8).collect();
        let (payload, consumed) = read_text(&bytes);
        assert_eq!(payload, expected, "payload for {input:?}");
        assert_eq!(consumed, bytes.len());
        assert_eq!(bytes.len(), text_wire_len(expected.len()));

        let len_field = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as usize;
        assert_eq!(len_field, expected.len() + 1);
    }
}

#[test]
fn word_patterns_for_edge_integers() {
    for n in [0, 1, -1, 255, 256, 65_536, i32::MAX, i32::MIN] {
        let mut out = SaneOutputStream::new(Vec::new());
        out.write_word(SaneWord::for_int(n)).unwrap();
        assert_eq!(out.into_inner().unwrap(), n.to_be_bytes().to_vec());
    }
}

/// Sink that fails once `limit` bytes have been accepted.
struct LimitedSink {
    data: Vec<u8>,
    limit: usize,
}

impl io::Write for LimitedSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.data.len() >= self.limit {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "connection closed"));
        }
        let n = buf.len().min(self.limit - self.data.len());
        self.data.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn transport_failure_is_reported_as_io() {
    let mut out = SaneOutputStream::with_capacity(4, LimitedSink { data: Vec::new(), limit: 6 });
    out.write_word(SaneWord::for_int(1)).unwrap();

    let err = out.write_text("abcdef").unwrap_err();
    assert!(err.is_io());
    assert!(matches!(err, WireError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
}

#[test]
fn compile_into_reports_count_and_leaves_stream_open() {
    let mut out = SaneOutputStream::new(Vec::new());
    let n = compile_into("# two values\nword 7\n\ntext hi\n", &mut out).unwrap();
    assert_eq!(n, 2);
    assert!(!out.is_closed());

    out.write_enum(&RpcCode::Exit).unwrap();
    assert_eq!(
        out.into_inner().unwrap(),
        vec![0, 0, 0, 7, 0, 0, 0, 3, b'h', b'i', 0, 0, 0, 0, 10]
    );
}
