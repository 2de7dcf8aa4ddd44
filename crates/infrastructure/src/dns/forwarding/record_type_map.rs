use dnsrecon_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::CNAME => HickoryRecordType::CNAME,
        }
    }

    /// `None` for types the recon engine never asks for.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::SOA => Some(RecordType::SOA),
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::AAAA => Some(RecordType::AAAA),
            HickoryRecordType::NS => Some(RecordType::NS),
            HickoryRecordType::MX => Some(RecordType::MX),
            HickoryRecordType::TXT => Some(RecordType::TXT),
            HickoryRecordType::CNAME => Some(RecordType::CNAME),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_maps_both_ways() {
        for rt in RecordType::PHASE_ONE.into_iter().chain(RecordType::PHASE_TWO) {
            assert_eq!(RecordTypeMapper::from_hickory(RecordTypeMapper::to_hickory(rt)), Some(rt));
        }
    }

    #[test]
    fn test_unknown_type() {
        assert_eq!(RecordTypeMapper::from_hickory(HickoryRecordType::PTR), None);
    }
}
