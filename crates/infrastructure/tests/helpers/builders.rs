use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, SOA, TXT};
use hickory_proto::rr::{Name, RData, Record};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

pub fn a(owner: &str, ip: [u8; 4]) -> Record {
    Record::from_rdata(name(owner), 300, RData::A(A(Ipv4Addr::from(ip))))
}

pub fn aaaa(owner: &str, ip: Ipv6Addr) -> Record {
    Record::from_rdata(name(owner), 300, RData::AAAA(AAAA(ip)))
}

pub fn cname(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::CNAME(CNAME(name(target))))
}

pub fn ns(owner: &str, host: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::NS(NS(name(host))))
}

pub fn mx(owner: &str, preference: u16, exchange: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::MX(MX::new(preference, name(exchange))))
}

pub fn soa(owner: &str, mname: &str, rname: &str) -> Record {
    Record::from_rdata(
        name(owner),
        300,
        RData::SOA(SOA::new(name(mname), name(rname), 1, 7200, 3600, 1_209_600, 300)),
    )
}

pub fn txt(owner: &str, strings: &[&str]) -> Record {
    Record::from_rdata(
        name(owner),
        300,
        RData::TXT(TXT::new(strings.iter().map(|s| s.to_string()).collect())),
    )
}

/// Response to `query_bytes` echoing its ID and question.
pub fn response_for(
    query_bytes: &[u8],
    rcode: ResponseCode,
    answers: Vec<Record>,
    authority: Vec<Record>,
) -> Vec<u8> {
    let query = Message::from_vec(query_bytes).unwrap();

    let mut message = Message::new(query.id(), MessageType::Response, OpCode::Query);
    message.set_recursion_desired(true);
    message.set_recursion_available(true);
    message.set_response_code(rcode);
    message.add_queries(query.queries().to_vec());
    for record in answers {
        message.add_answer(record);
    }
    for record in authority {
        message.add_name_server(record);
    }

    message.to_vec().unwrap()
}
