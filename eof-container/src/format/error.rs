/// Reasons an EOF1 container is rejected.
///
/// Every variant is terminal: the input must not be executed.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EofError {
    #[error("invalid EOF format byte")]
    InvalidFormatByte,

    #[error("invalid EOF magic")]
    InvalidMagic,

    #[error("invalid EOF version")]
    InvalidVersion,

    #[error("EOF1 code section missing")]
    CodeSectionMissing,

    #[error("EOF1 code section size missing")]
    CodeSectionSizeMissing,

    #[error("EOF1 empty code section")]
    EmptyCodeSection,

    #[error("EOF1 multiple code sections")]
    MultipleCodeSections,

    #[error("EOF1 data section before code section")]
    DataSectionBeforeCodeSection,

    #[error("EOF1 data section size missing")]
    DataSectionSizeMissing,

    #[error("EOF1 empty data section")]
    EmptyDataSection,

    #[error("EOF1 multiple data sections")]
    MultipleDataSections,

    #[error("EOF1 unknown section")]
    UnknownSection,

    #[error("EOF1 invalid total size")]
    InvalidTotalSize,
}

pub type Result<T> = std::result::Result<T, EofError>;
