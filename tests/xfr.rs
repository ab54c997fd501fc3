//! Zone transfers against scripted servers.

use rstest::rstest;
use std::str::FromStr;
use std::time::Duration;
use tokio::io::{duplex, DuplexStream};
use tokio::net::TcpListener;
use tokio::time::Instant;
use zonesync::base::iana::{Rcode, Rtype};
use zonesync::base::{Message, Name, Question, Record, Serial};
use zonesync::net::{self, TcpClient};
use zonesync::rdata::RecordData;
use zonesync::utils::base16;
use zonesync::xfr::{Config, Error, ProtocolError, XfrResult, ZoneTransfer};

//------------ Fixtures ------------------------------------------------------

/// An IXFR response for an up-to-date zone containing the whole zone.
///
/// The zone is b2b.macquarie.com. with serial 2008021850.
const EXTRA_DATA: &str = concat!(
    "a27f8400000100750000000003623262096d616371756172696503636f6d0000",
    "fb0001c00c000600010000012c00310b6973647379647372763133c0100c6974",
    "73627367756e78737570c01077affb5a0000012c0000000f00093a800000012c",
    "c00c000200010000012c00160550444e533108554c545241444e5302434f0255",
    "4b00c00c000200010000012c00080550444e5332c072c00c000200010000012c",
    "00080550444e5333c072c00c000200010000012c00080550444e5334c072c00c",
    "000200010000012c00080550444e5335c072c00c000200010000012c00080550",
    "444e5336c072056168303170c00c000500010000012c000f0c61683031702d72",
    "686f646573c00c0961683031702d67706fc00c00010001000151800004ca2b85",
    "1ec0f800010001000151800004ca2b841705616f303170c00c00050001000001",
    "2c000f0c616f3031702d72686f646573c00c09616f3031702d67706fc00c0001",
    "0001000151800004ca2b850fc14300010001000151800004ca2b840f09617030",
    "31702d67706fc00c00010001000151800004ca2b85020f61703031702d6d6967",
    "726174696f6ec00c000500010000012c000f0c61703031702d72686f646573c0",
    "0c0f61703031702d706f73747365727631c00c000100010000012c0004cb12d1",
    "2ec1b200010001000151800004ca2b840205617a303170c00c00050001000001",
    "2c000f0c617a3031702d72686f646573c00c09617a3031702d67706fc00c0001",
    "0001000151800004ca2b851ac20300010001000151800004ca2b841305626130",
    "3170c00c000500010000012c000f0c62613031702d72686f646573c00c096261",
    "3031702d67706fc00c00010001000151800004ca2b851cc24e00010001000151",
    "800004ca2b841505636c303170c00c000500010000012c00110e636f6e646972",
    "702d72686f646573c00c05636d303170c00c000500010000012c000f0c636d30",
    "31702d72686f646573c00c09636d3031702d67706fc00c000100010001518000",
    "04ca2b8512c2bc00010001000151800004ca2b841d0b636f6e646972702d6770",
    "6fc00c00010001000151800004ca2b8506c29900010001000151800004ca2b84",
    "06056373303170c00c000500010000012c000f0c63753031702d72686f646573",
    "c00c0f63733031702d706f73747365727631c00c000100010000012c0004cb1c",
    "5e15056373303270c00c000500010000012c000f0c63733032702d72686f6465",
    "73c00c0963733032702d67706fc00c00010001000151800004ca2b8514c37400",
    "010001000151800004ca2b840e0963753031702d67706fc00c00010001000151",
    "800004ca2b8503c33300010001000151800004ca2b8403056664303170c00c00",
    "0500010000012c000f0c66643031702d72686f646573c00c0966643031702d67",
    "706fc00c00010001000151800004ca2b8520c3e900010001000151800004ca2b",
    "8419056673303170c00c000500010000012c0002c2990966733031702d67706f",
    "c00c00010001000151800004ca2b85060c66733031702d72686f646573c00c00",
    "010001000151800004ca2b8406056678303170c00c000500010000012c000f0c",
    "66783031702d72686f646573c00c0966783031702d67706fc00c000100010001",
    "51800004ca2b8519c47f00010001000151800004ca2b841205676d303170c00c",
    "000500010000012c000f0c676d3031702d72686f646573c00c09676d3031702d",
    "67706fc00c00010001000151800004ca2b851bc4ca00010001000151800004ca",
    "2b84140968703031702d67706fc00c00010001000151800004ca2b85040f6870",
    "3031702d6d6967726174696f6ec00c000500010000012c000f0c68703031702d",
    "72686f646573c00c0f68703031702d706f73747365727631c00c000100010000",
    "012c0004cb12d12ec53900010001000151800004ca2b8404056c65303170c00c",
    "000500010000012c000f0c6c653031702d72686f646573c00c096c653031702d",
    "67706fc00c00010001000151800004ca2b8521c58a00010001000151800004ca",
    "2b841a056c6d303170c00c000500010000012c0002c333066d616366636cc00c",
    "000500010000012c00100d6d616366636c2d72686f646573c00c0a6d61636663",
    "6c2d67706fc00c00010001000151800004ca2b8528c5ea000100010001518000",
    "04ca2b840a056d68303170c00c000500010000012c000f0c6d683031702d7268",
    "6f646573c00c096d683031702d67706fc00c00010001000151800004ca2b851d",
    "c63700010001000151800004ca2b8416056d73303170c00c000500010000012c",
    "000f0c6d733031702d72686f646573c00c096d733031702d67706fc00c000100",
    "01000151800004ca2b8511c68200010001000151800004ca2b841c056d793031",
    "70c00c000500010000012c000f0c6d793031702d72686f646573c00c096d7930",
    "31702d67706fc00c00010001000151800004ca2b85050f6d793031702d6d6967",
    "726174696f6ec00c000500010000012c0002c6cd0f6d793031702d706f737473",
    "65727631c00c000100010000012c0004cb12d183c6cd00010001000151800004",
    "ca2b8405056e61303170c00c000500010000012c0002c2990f6e613031702d70",
    "6f73747365727631c00c000100010000012c0004cb12d183056e7a303170c00c",
    "000500010000012c0002c299096e7a3031702d67706fc00c0001000100015180",
    "0004ca2b85060c6e7a3031702d72686f646573c00c00010001000151800004ca",
    "2b8406057063303170c00c000500010000012c000f0c70633031702d72686f64",
    "6573c00c0970633031702d67706fc00c00010001000151800004ca2b8523c7d5",
    "00010001000151800004ca2b842305706c303170c00c000500010000012c000f",
    "0c706c3031702d72686f646573c00c09706c3031702d67706fc00c0001000100",
    "0151800004ca2b851fc82000010001000151800004ca2b8418057267303170c0",
    "0c000500010000012c000f0c72673031702d72686f646573c00c097267303170",
    "2d67706fc00c00010001000151800004ca2b8526c86b00010001000151800004",
    "ca2b841f057368303170c00c000500010000012c000f0c73683031702d72686f",
    "646573c00c0973683031702d67706fc00c00010001000151800004ca2b8522c8",
    "b600010001000151800004ca2b841b057370303170c00c000500010000012c00",
    "0f0c73703031702d72686f646573c00c0973703031702d67706fc00c00010001",
    "000151800004ca2b85070f73703031702d706f73747365727631c00c00010001",
    "0000012c0004cb1c5e15c90100010001000151800004ca2b84070474657374c0",
    "0c000100010000012c0004cb17c80a057473303170c00c000500010000012c00",
    "0f0c74733031702d72686f646573c00c0974733031702d67706fc00c00010001",
    "000151800004ca2b8524c98100010001000151800004ca2b8424057561303170",
    "c00c000500010000012c000f0c75613031702d72686f646573c00c0975613031",
    "702d67706fc00c00010001000151800004ca2b85080f75613031702d6d696772",
    "6174696f6ec00c000500010000012c0002c9cc0f75613031702d706f73747365",
    "727631c00c000100010000012c0004cb12d183c9cc00010001000151800004ca",
    "2b8408057570303170c00c000500010000012c000f0c75703031702d72686f64",
    "6573c00c0975703031702d67706fc00c00010001000151800004ca2b8522ca55",
    "00010001000151800004ca2b8422057668303170c00c000500010000012c000f",
    "0c76683031702d72686f646573c00c05766c303170c00c000500010000012c00",
    "0f0c766c3031702d72686f646573c00c09766c3031702d67706fc00c00010001",
    "000151800004ca2b8525cac100010001000151800004ca2b8425057670303170",
    "c00c000500010000012c000f0c76703031702d72686f646573c00c0976703031",
    "702d67706fc00c00010001000151800004ca2b8510cb0c000100010001518000",
    "04ca2b8410057762303170c00c000500010000012c000f0c77623031702d7268",
    "6f646573c00c0977623031702d67706fc00c00010001000151800004ca2b8518",
    "cb5700010001000151800004ca2b8411057770303170c00c000500010000012c",
    "000f0c77703031702d72686f646573c00c0977703031702d67706fc00c000100",
    "01000151800004ca2b850ecba200010001000151800004ca2b840cc00c000600",
    "010000012c0018c02fc03d77affb5a0000012c0000000f00093a800000012c",
);

/// An up-to-date IXFR response with an AXFR question and extra data.
///
/// The zone is expertfootballchallenge.com. with serial 2011071501.
const WRONG_QUESTION: &str = concat!(
    "58078400000100070000000017657870657274666f6f7462616c6c6368616c6c",
    "656e676503636f6d0000fc0001c00c0006000100001c20002e036e733306756e",
    "69626574c0240a686f73746d6173746572c00c77de840d00002a3000001c2000",
    "1baf8000001c20c00c0002000100001c2000140575646e733108756c74726164",
    "6e73036e657400c00c0002000100001c200002c039c00c0002000100001c2000",
    "080575646e7332c079c00c0001000100001c20000457fd981f03777777c00c00",
    "01000100001c20000457fd981fc00c0006000100001c200018c039c04677de84",
    "0d00002a3000001c20001baf8000001c20",
);

//------------ Helpers -------------------------------------------------------

fn init_logging() {
    // Override with env var RUST_LOG, e.g. RUST_LOG=trace.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .try_init()
        .ok();
}

fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

fn server_addr() -> std::net::SocketAddr {
    "192.0.2.53:53".parse().unwrap()
}

fn deadline() -> Instant {
    Instant::now() + Duration::from_secs(10)
}

fn soa(zone: &str, serial: u32) -> String {
    format!(
        "{zone} 3600 IN SOA ns.{zone} hostmaster.{zone} \
         {serial} 7200 3600 1209600 300"
    )
}

/// Composes a response with the given question and answer records.
fn response(question: Option<Question>, records: &[String]) -> Vec<u8> {
    let mut msg = Message::new();
    msg.header_mut().set_qr(true);
    if let Some(question) = question {
        msg.push_question(question);
    }
    for item in records {
        msg.push_answer(Record::from_str(item).unwrap());
    }
    msg.compose().unwrap()
}

/// Answers each query with the given responses.
///
/// The message ID of each response is replaced with that of the query.
/// Returns the queries received.
async fn serve(
    stream: DuplexStream,
    exchanges: Vec<Vec<Vec<u8>>>,
) -> Vec<Message> {
    let mut server = TcpClient::new(stream);
    let mut queries = Vec::new();
    for responses in exchanges {
        let query =
            Message::from_octets(&server.receive(deadline()).await.unwrap())
                .unwrap();
        let id = query.header().id().to_be_bytes();
        for mut response in responses {
            response[..2].copy_from_slice(&id);
            server.send(&response, deadline()).await.unwrap();
        }
        queries.push(query);
    }
    queries
}

/// Runs a transfer against a server answering with `exchanges`.
async fn transfer(
    xfr: ZoneTransfer,
    exchanges: Vec<Vec<Vec<u8>>>,
) -> (Result<XfrResult, Error>, Vec<Message>) {
    let (client, server) = duplex(0x10000);
    let server = tokio::spawn(serve(server, exchanges));
    let mut client = TcpClient::new(client);
    let res = xfr.run_with(&mut client).await;
    drop(client);
    (res, server.await.unwrap())
}

fn lenient(ignore_question: bool, ignore_extra_data: bool) -> Config {
    let mut config = Config::new();
    config.set_ignore_response_question_type(ignore_question);
    config.set_ignore_extra_data(ignore_extra_data);
    config
}

fn assert_protocol_error(res: Result<XfrResult, Error>, err: ProtocolError) {
    match res {
        Err(Error::Protocol(found)) => assert_eq!(found, err),
        res => panic!("expected {err}, got {res:?}"),
    }
}

//------------ Leniency ------------------------------------------------------

#[rstest]
#[case::strict(false)]
#[case::lenient(true)]
#[tokio::test]
async fn extra_data_in_ixfr_response(#[case] ignore_extra_data: bool) {
    init_logging();
    let xfr = ZoneTransfer::ixfr(
        name("b2b.macquarie.com."),
        Serial(2008021850),
        server_addr(),
    )
    .with_config(lenient(false, ignore_extra_data));
    let fixture = base16::decode(EXTRA_DATA).unwrap();
    let (res, queries) = transfer(xfr, vec![vec![fixture]]).await;

    if ignore_extra_data {
        assert_eq!(res.unwrap(), XfrResult::UpToDate);
    } else {
        assert_protocol_error(res, ProtocolError::ExtraData);
    }

    // The query carries our serial in the authority section.
    let query = &queries[0];
    assert_eq!(query.question()[0].qtype(), Rtype::IXFR);
    assert_eq!(query.authority().len(), 1);
    match query.authority()[0].data() {
        RecordData::Soa(soa) => assert_eq!(soa.serial(), Serial(2008021850)),
        data => panic!("expected SOA, got {data}"),
    }
}

#[rstest]
#[case::strict(false, false, Some(ProtocolError::QuestionMismatch))]
#[case::ignore_question(true, false, Some(ProtocolError::ExtraData))]
#[case::ignore_extra_data(false, true, Some(ProtocolError::QuestionMismatch))]
#[case::ignore_both(true, true, None)]
#[tokio::test]
async fn incorrect_question_type_in_ixfr_response(
    #[case] ignore_question: bool,
    #[case] ignore_extra_data: bool,
    #[case] expected: Option<ProtocolError>,
) {
    init_logging();
    let xfr = ZoneTransfer::ixfr(
        name("expertfootballchallenge.com."),
        Serial(2011071501),
        server_addr(),
    )
    .with_config(lenient(ignore_question, ignore_extra_data));
    let fixture = base16::decode(WRONG_QUESTION).unwrap();
    let (res, _) = transfer(xfr, vec![vec![fixture]]).await;
    match expected {
        Some(err) => {
            assert_protocol_error(res, err);
            assert!(err.suppressed_by().is_some());
        }
        None => assert!(res.unwrap().is_up_to_date()),
    }
}

#[tokio::test]
async fn repeated_soa_is_up_to_date() {
    init_logging();
    let zone = "example.com.";
    let xfr = ZoneTransfer::ixfr(name(zone), Serial(2), server_addr());
    let question = Question::new_in(name(zone), Rtype::IXFR);
    let (res, _) = transfer(
        xfr,
        vec![vec![response(
            Some(question),
            &[soa(zone, 2), soa(zone, 2)],
        )]],
    )
    .await;
    assert_eq!(res.unwrap(), XfrResult::UpToDate);
}

#[rstest]
#[case::strict(false)]
#[case::lenient(true)]
#[tokio::test]
async fn repeated_soa_with_trailing_records(#[case] ignore_extra_data: bool) {
    init_logging();
    let zone = "example.com.";
    let xfr = ZoneTransfer::ixfr(name(zone), Serial(2), server_addr())
        .with_config(lenient(false, ignore_extra_data));
    let question = Question::new_in(name(zone), Rtype::IXFR);
    let (res, _) = transfer(
        xfr,
        vec![vec![response(
            Some(question),
            &[
                soa(zone, 2),
                soa(zone, 2),
                format!("www.{zone} 3600 IN A 192.0.2.80"),
                format!("{zone} 3600 IN NS ns.{zone}"),
            ],
        )]],
    )
    .await;
    if ignore_extra_data {
        assert_eq!(res.unwrap(), XfrResult::UpToDate);
    } else {
        assert_protocol_error(res, ProtocolError::ExtraData);
    }
}

//------------ Transfers -----------------------------------------------------

#[tokio::test]
async fn axfr_over_several_messages() {
    init_logging();
    let zone = "example.com.";
    let question = Question::new_in(name(zone), Rtype::AXFR);
    let xfr = ZoneTransfer::axfr(name(zone), server_addr());
    let (res, queries) = transfer(
        xfr,
        vec![vec![
            response(
                Some(question),
                &[
                    soa(zone, 7),
                    "example.com. 3600 IN NS ns.example.com.".into(),
                ],
            ),
            response(None, &["ns.example.com. 3600 IN A 192.0.2.53".into()]),
            response(
                None,
                &[
                    "www.example.com. 3600 IN AAAA 2001:db8::1".into(),
                    soa(zone, 7),
                ],
            ),
        ]],
    )
    .await;
    let res = res.unwrap();
    let records = res.axfr().unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].rtype(), Rtype::SOA);
    assert_eq!(records[3].rtype(), Rtype::AAAA);
    assert!(queries[0].authority().is_empty());
}

#[tokio::test]
async fn incremental_transfer() {
    init_logging();
    let zone = "example.com.";
    let question = Question::new_in(name(zone), Rtype::IXFR);
    let xfr = ZoneTransfer::ixfr(name(zone), Serial(1), server_addr());
    let (res, _) = transfer(
        xfr,
        vec![vec![response(
            Some(question),
            &[
                soa(zone, 2),
                soa(zone, 1),
                "old.example.com. 3600 IN A 192.0.2.1".into(),
                soa(zone, 2),
                "new.example.com. 3600 IN A 192.0.2.2".into(),
                soa(zone, 2),
            ],
        )]],
    )
    .await;
    let res = res.unwrap();
    let deltas = res.ixfr().unwrap();
    assert_eq!(deltas.len(), 1);
    assert_eq!(deltas[0].start, Serial(1));
    assert_eq!(deltas[0].end, Serial(2));
    assert_eq!(deltas[0].deletes[1].owner(), &name("old.example.com."));
    assert_eq!(deltas[0].adds[1].owner(), &name("new.example.com."));
}

#[rstest]
#[case::notimp(Rcode::NOTIMP)]
#[case::empty_answer(Rcode::NOERROR)]
#[tokio::test]
async fn fallback_to_axfr(#[case] rcode: Rcode) {
    init_logging();
    let zone = "example.com.";
    let mut refusal = Message::new();
    refusal.header_mut().set_qr(true);
    refusal.header_mut().set_rcode(rcode);
    refusal.push_question(Question::new_in(name(zone), Rtype::IXFR));
    let refusal = refusal.compose().unwrap();
    let axfr = response(
        Some(Question::new_in(name(zone), Rtype::AXFR)),
        &[
            soa(zone, 3),
            "www.example.com. 3600 IN A 192.0.2.1".into(),
            soa(zone, 3),
        ],
    );

    let mut config = Config::new();
    config.set_fallback_to_axfr(true);
    let xfr = ZoneTransfer::ixfr(name(zone), Serial(1), server_addr())
        .with_config(config);
    let (res, queries) =
        transfer(xfr, vec![vec![refusal.clone()], vec![axfr]]).await;
    assert_eq!(res.unwrap().axfr().unwrap().len(), 2);
    assert_eq!(queries[1].question()[0].qtype(), Rtype::AXFR);

    // Without fallback, the refusal is an error.
    let xfr = ZoneTransfer::ixfr(name(zone), Serial(1), server_addr());
    let (res, _) = transfer(xfr, vec![vec![refusal]]).await;
    match (rcode, res) {
        (Rcode::NOTIMP, Err(Error::Rcode(found))) => {
            assert_eq!(found, Rcode::NOTIMP)
        }
        (Rcode::NOERROR, Err(Error::Protocol(err))) => {
            assert_eq!(err, ProtocolError::EmptyAnswer)
        }
        (_, res) => panic!("unexpected result {res:?}"),
    }
}

//------------ Transport Failures --------------------------------------------

#[tokio::test(start_paused = true)]
async fn transfer_timeout() {
    init_logging();
    let (client, _server) = duplex(0x10000);
    let mut config = Config::new();
    config.set_timeout(Duration::from_secs(5));
    let xfr = ZoneTransfer::axfr(name("example.com."), server_addr())
        .with_config(config);
    let start = Instant::now();
    let res = xfr.run_with(&mut TcpClient::new(client)).await;
    match res {
        Err(err) => assert!(err.is_timeout(), "{err}"),
        Ok(res) => panic!("unexpected result {res:?}"),
    }
    assert!(Instant::now() - start >= Duration::from_secs(5));
}

#[tokio::test]
async fn connection_closed() {
    init_logging();
    let xfr = ZoneTransfer::axfr(name("example.com."), server_addr());
    let (res, _) = transfer(xfr, vec![vec![]]).await;
    assert!(matches!(res, Err(Error::Net(net::Error::ConnectionClosed))));
}

#[tokio::test]
async fn run_over_tcp() {
    init_logging();
    let zone = "example.com.";
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let axfr = response(
        Some(Question::new_in(name(zone), Rtype::AXFR)),
        &[soa(zone, 1), soa(zone, 1)],
    );
    let server = tokio::spawn(async move {
        let (sock, _) = listener.accept().await.unwrap();
        let mut server = TcpClient::new(sock);
        let query = Message::from_octets(
            &server.receive(deadline()).await.unwrap(),
        )
        .unwrap();
        let mut axfr = axfr;
        axfr[..2].copy_from_slice(&query.header().id().to_be_bytes());
        server.send(&axfr, deadline()).await.unwrap();
    });
    let res = ZoneTransfer::axfr(name(zone), addr).run().await.unwrap();
    assert_eq!(res.axfr().unwrap().len(), 1);
    server.await.unwrap();
}
