//! Records through the wire and presentation formats.

use rstest::rstest;
use std::str::FromStr;
use zonesync::base::iana::{DigestAlg, Rtype};
use zonesync::base::name::Compressor;
use zonesync::base::wire::Parser;
use zonesync::base::{Message, Name, Question, Record};
use zonesync::rdata::{Ds, RecordData};

const SIGNZONE_KEY: &str = "signzone.biz. 3600 IN DNSKEY 257 3 8 ( \
    AwEAAceDrbuyohhRgE//F5zcnCyQrI/zB2Ve2SG2aeenNUP3husgP31b \
    Pz8KNmfnpbBTwU08r3pUnamXjV36VltEjgPzqo3xjrDeGugT4jLuP07m/pLEzsn/ \
    vvuztTCh15p6Z4sFq+P1J/WPpR3hODAA5ywJBVNX8QOvmZpxUw8GlcXn )";

fn compose(record: &Record) -> Vec<u8> {
    let mut target = Compressor::new();
    record.compose(&mut target).unwrap();
    target.into_target()
}

#[rstest]
#[case::alias("www.example.com. 300 IN CNAME web.example.com.")]
#[case::two_strings("host.example.com. 300 IN HINFO \"PDP-11\" \"UNIX\"")]
#[case::number_and_name("example.com. 300 IN MX 10 mail.example.com.")]
#[case::route_through("example.com. 300 IN RT 20 relay.example.com.")]
#[case::key(SIGNZONE_KEY)]
#[case::text("example.com. 300 IN TXT \"v=spf1 -all\" \"second\"")]
#[case::open_paren("example.com. 60 IN CNAME t\\(x.example.com.")]
#[case::close_paren("example.com. 60 IN CNAME t\\)x.example.com.")]
#[case::semicolon("example.com. 60 IN CNAME t\\;x.example.com.")]
#[case::quote("example.com. 60 IN CNAME t\\\"x.example.com.")]
#[case::at_sign("\\@.example.com. 60 IN NS ns\\ 1.example.com.")]
#[case::unknown("example.com. 300 IN TYPE65534 \\# 3 ABCDEF")]
fn wire_round_trip(#[case] text: &str) {
    let record = Record::from_str(text).unwrap();
    let first = compose(&record);

    let mut parser = Parser::from_ref(first.as_slice());
    let parsed = Record::parse(&mut parser).unwrap();
    assert_eq!(parser.remaining(), 0);
    assert_eq!(parsed, record);
    assert_eq!(compose(&parsed), first);

    // And through the presentation format.
    assert_eq!(Record::from_str(&record.to_string()).unwrap(), record);
}

#[test]
fn message_with_compression() {
    let mut msg = Message::query(Question::new_in(
        Name::from_str("example.com.").unwrap(),
        Rtype::AXFR,
    ));
    for text in [
        "example.com. 300 IN NS ns1.example.com.",
        "example.com. 300 IN NS ns2.example.com.",
        "example.com. 300 IN MX 10 mail.example.com.",
        "example.com. 300 IN DNAME example.net.",
        SIGNZONE_KEY,
    ] {
        msg.push_answer(Record::from_str(text).unwrap());
    }
    let octets = msg.compose().unwrap();
    let parsed = Message::from_octets(&octets).unwrap();
    assert_eq!(parsed, msg);
    assert_eq!(parsed.compose().unwrap(), octets);
}

#[test]
fn ds_from_published_key() {
    let record = Record::from_str(SIGNZONE_KEY).unwrap();
    let RecordData::Dnskey(key) = record.data() else {
        panic!("not a DNSKEY record")
    };
    assert_eq!(key.key_tag(), 10045);

    let ds = Ds::from_dnskey(record.owner(), key, DigestAlg::SHA1).unwrap();
    assert_eq!(
        ds.to_string(),
        "10045 8 1 CB2623B9580376827F15ED348CFBF3DF87321855"
    );
    let ds = Ds::from_dnskey(record.owner(), key, DigestAlg::SHA256).unwrap();
    assert_eq!(
        ds.to_string(),
        "10045 8 2 \
         C4C8E23D9DA3878EA86113A60F8A01F5A5FADDBC03DC0FD3950BDC4AD9326AFA"
    );
}
