use eof_container::{is_valid_eof, read_eof1_header, EofError};
use pretty_assertions::assert_eq;

struct ValidCase {
    code: &'static str,
    code_size: u16,
    data_size: u16,
}

const VALID: &[ValidCase] = &[
    ValidCase { code: "EFCAFE01010002006000", code_size: 2, data_size: 0 },
    ValidCase { code: "EFCAFE01010002020004006000AABBCCDD", code_size: 2, data_size: 4 },
];

const INVALID: &[(&str, EofError)] = &[
    ("", EofError::InvalidFormatByte),
    ("FE", EofError::InvalidFormatByte),
    ("FECAFE01010002020004006000AABBCCDD", EofError::InvalidFormatByte),
    ("EF", EofError::InvalidMagic),
    ("EFCA", EofError::InvalidMagic),
    ("EFCAFF", EofError::InvalidMagic),
    ("EFCAFF01010002020004006000AABBCCDD", EofError::InvalidMagic),
    ("EFCAFE", EofError::InvalidVersion),
    ("EFCAFE00", EofError::InvalidVersion),
    ("EFCAFE02", EofError::InvalidVersion),
    ("EFCAFE00010002020004006000AABBCCDD", EofError::InvalidVersion),
    // no header
    ("EFCAFE01", EofError::CodeSectionMissing),
    // terminator only
    ("EFCAFE0100", EofError::CodeSectionMissing),
    ("EFCAFE0101", EofError::CodeSectionSizeMissing),
    ("EFCAFE010100", EofError::CodeSectionSizeMissing),
    // no terminator
    ("EFCAFE01010002", EofError::InvalidTotalSize),
    // no code bytes
    ("EFCAFE0101000200", EofError::InvalidTotalSize),
    ("EFCAFE010100020060", EofError::InvalidTotalSize),
    // trailing bytes after code
    ("EFCAFE01010002006000DEADBEEF", EofError::InvalidTotalSize),
    ("EFCAFE010100020100020060006000", EofError::MultipleCodeSections),
    ("EFCAFE0101000000", EofError::EmptyCodeSection),
    ("EFCAFE0101000002000200AABB", EofError::EmptyCodeSection),
    ("EFCAFE0102000401000200AABBCCDD6000", EofError::DataSectionBeforeCodeSection),
    ("EFCAFE01020004AABBCCDD", EofError::DataSectionBeforeCodeSection),
    ("EFCAFE0101000202", EofError::DataSectionSizeMissing),
    ("EFCAFE010100020200", EofError::DataSectionSizeMissing),
    // no terminator
    ("EFCAFE01010002020004", EofError::InvalidTotalSize),
    // no data bytes
    ("EFCAFE01010002020004006000", EofError::InvalidTotalSize),
    ("EFCAFE01010002020004006000AABBCC", EofError::InvalidTotalSize),
    // trailing bytes after data
    ("EFCAFE01010002020004006000AABBCCDDEE", EofError::InvalidTotalSize),
    ("EFCAFE01010002020000006000", EofError::EmptyDataSection),
    ("EFCAFE01010002020004020004006000AABBCCDDAABBCCDD", EofError::MultipleDataSections),
    // section id 3
    ("EFCAFE01010002030004006000AABBCCDD", EofError::UnknownSection),
];

fn decode(code: &str) -> Vec<u8> {
    hex::decode(code).unwrap_or_else(|e| panic!("bad test vector {code:?}: {e}"))
}

#[test]
fn read_valid_headers() {
    for case in VALID {
        let header = read_eof1_header(&decode(case.code))
            .unwrap_or_else(|e| panic!("code {} failed validation: {e}", case.code));
        assert_eq!(header.code_size, case.code_size, "code {}", case.code);
        assert_eq!(header.data_size, case.data_size, "code {}", case.code);
    }
}

#[test]
fn valid_header_offsets() {
    let header = read_eof1_header(&decode(VALID[1].code)).unwrap();
    assert_eq!(header.code_offset, 11);
    assert_eq!(header.data_offset, 13);
}

#[test]
fn invalid_containers_are_not_valid_eof() {
    for (code, _) in INVALID {
        assert!(!is_valid_eof(&decode(code)), "code {code} expected to be invalid");
    }
    for case in VALID {
        assert!(is_valid_eof(&decode(case.code)), "code {} expected to be valid", case.code);
    }
}

#[test]
fn invalid_containers_report_first_error() {
    for (code, expected) in INVALID {
        assert_eq!(read_eof1_header(&decode(code)), Err(*expected), "code {code}");
    }
}

#[test]
fn error_messages_are_stable() {
    assert_eq!(EofError::InvalidFormatByte.to_string(), "invalid EOF format byte");
    assert_eq!(EofError::InvalidTotalSize.to_string(), "EOF1 invalid total size");
    assert_eq!(
        EofError::DataSectionBeforeCodeSection.to_string(),
        "EOF1 data section before code section"
    );
}
