use std::fmt;
use std::str::FromStr;

/// Record types collected for every reconnoitred domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RecordType {
    SOA,
    A,
    AAAA,
    NS,
    MX,
    TXT,
    CNAME,
}

impl RecordType {
    /// Authority-check lookups, issued before anything else.
    pub const PHASE_ONE: [RecordType; 3] = [RecordType::SOA, RecordType::A, RecordType::AAAA];

    /// Secondary lookups, only issued once the domain showed some sign of life.
    pub const PHASE_TWO: [RecordType; 4] = [
        RecordType::NS,
        RecordType::MX,
        RecordType::TXT,
        RecordType::CNAME,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::SOA => "SOA",
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::NS => "NS",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::CNAME => "CNAME",
        }
    }

    /// Lower-case key used by the error map and the CNAME-paths map of `DomainData`.
    pub fn key(&self) -> &'static str {
        match self {
            RecordType::SOA => "soa",
            RecordType::A => "a",
            RecordType::AAAA => "aaaa",
            RecordType::NS => "ns",
            RecordType::MX => "mx",
            RecordType::TXT => "txt",
            RecordType::CNAME => "cname",
        }
    }

    /// Wire format number (RFC 1035 / RFC 3596)
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
        }
    }

    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            5 => Some(RecordType::CNAME),
            6 => Some(RecordType::SOA),
            15 => Some(RecordType::MX),
            16 => Some(RecordType::TXT),
            28 => Some(RecordType::AAAA),
            _ => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SOA" => Ok(RecordType::SOA),
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "NS" => Ok(RecordType::NS),
            "MX" => Ok(RecordType::MX),
            "TXT" => Ok(RecordType::TXT),
            "CNAME" => Ok(RecordType::CNAME),
            other => Err(format!("Unsupported record type: {}", other)),
        }
    }
}
