use serde::{Serialize, Serializer};
use thiserror::Error;

/// Failure of a single record-type lookup.
///
/// The display form is the fixed code string reported in `DomainData.errors`
/// and, after a phase-one short-circuit, in `DomainData.status`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupError {
    #[error("TIMEOUT")]
    Timeout,

    #[error("ERROR")]
    Failed,

    #[error("NODATA")]
    NoData,

    #[error("NXDOMAIN")]
    NxDomain,

    #[error("SERVFAIL")]
    ServFail,

    #[error("REFUSED")]
    Refused,

    #[error("NOTIMP")]
    NotImp,

    #[error("YXDOMAIN")]
    YxDomain,

    #[error("NXRRSET")]
    NxRrSet,

    #[error("YXRRSET")]
    YxRrSet,

    #[error("NOTZONE")]
    NotZone,

    #[error("NOTAUTH")]
    NotAuth,

    #[error("BADNAME")]
    BadName,

    #[error("BADTRUNC")]
    BadTrunc,
}

impl LookupError {
    /// Maps a response code to its error, `None` for NOERROR.
    /// Codes without a dedicated string (FORMERR, BADVERS, ...) become `Failed`.
    pub fn from_rcode(rcode: u16) -> Option<Self> {
        match rcode {
            0 => None,
            2 => Some(LookupError::ServFail),
            3 => Some(LookupError::NxDomain),
            4 => Some(LookupError::NotImp),
            5 => Some(LookupError::Refused),
            6 => Some(LookupError::YxDomain),
            7 => Some(LookupError::YxRrSet),
            8 => Some(LookupError::NxRrSet),
            9 => Some(LookupError::NotAuth),
            10 => Some(LookupError::NotZone),
            20 => Some(LookupError::BadName),
            22 => Some(LookupError::BadTrunc),
            _ => Some(LookupError::Failed),
        }
    }
}

impl Serialize for LookupError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
