/// ライブラリ共通のエラー型
///
/// 各構造の`try_`系のメソッドは状態を変更する前に引数を検査し, このエラーを返す.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// 添字や区間が`0..len`(もしくは`0..=len`)に収まっていない
    OutOfRange {
        /// 問題のあった添字
        index: usize,
        /// 構造の長さ
        len: usize,
    },
    /// 添字以外の引数が不正 (負の容量, 逆転した区間など)
    InvalidArgument(&'static str),
    /// 法が畳み込みに必要な構造を持たない
    UnsupportedModulus {
        /// 検査に失敗した法
        modulus: u32,
    },
    /// 前提となる操作を行う前に呼び出された
    PrecedenceViolation(&'static str),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OutOfRange { index, len } => {
                write!(f, "index out of range: the len is {len} but the index is {index}")
            }
            Error::InvalidArgument(what) => write!(f, "invalid argument: {what}"),
            Error::UnsupportedModulus { modulus } => {
                write!(f, "unsupported modulus: {modulus}")
            }
            Error::PrecedenceViolation(what) => write!(f, "precedence violation: {what}"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
