//! Running a zone transfer.

use super::config::Config;
use super::error::Error;
use super::interpreter::XfrResponseInterpreter;
use super::types::XfrResult;
use crate::base::iana::{Class, Rcode, Rtype};
use crate::base::{Message, Name, Question, Record, Serial, Ttl};
use crate::net::{self, Phase, TcpClient};
use crate::rdata::Soa;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::time::Instant;
use tracing::{debug, trace};

//------------ ZoneTransfer --------------------------------------------------

/// A zone transfer from a primary server.
///
/// A value is created for either an AXFR via [`axfr`][Self::axfr] or an
/// IXFR via [`ixfr`][Self::ixfr] and then run via [`run`][Self::run],
/// which connects to the server, or [`run_with`][Self::run_with], which
/// uses an existing connection.
///
/// ```no_run
/// use std::str::FromStr;
/// use zonesync::base::{Name, Serial};
/// use zonesync::xfr::ZoneTransfer;
///
/// # async fn run() -> Result<(), zonesync::xfr::Error> {
/// let xfr = ZoneTransfer::ixfr(
///     Name::from_str("example.com.").unwrap(),
///     Serial(2024010101),
///     "192.0.2.1:53".parse().unwrap(),
/// );
/// match xfr.run().await? {
///     res if res.is_up_to_date() => println!("up to date"),
///     res => println!("{res:?}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ZoneTransfer {
    /// The name of the zone.
    zone: Name,

    /// The class of the zone.
    class: Class,

    /// The serial of the zone we have for an IXFR.
    serial: Option<Serial>,

    /// The address of the primary.
    server: SocketAddr,

    /// The configuration.
    config: Config,
}

impl ZoneTransfer {
    /// Creates a transfer of the complete zone.
    pub fn axfr(zone: Name, server: SocketAddr) -> Self {
        ZoneTransfer {
            zone,
            class: Class::IN,
            serial: None,
            server,
            config: Config::new(),
        }
    }

    /// Creates an incremental transfer starting at the given serial.
    pub fn ixfr(zone: Name, serial: Serial, server: SocketAddr) -> Self {
        ZoneTransfer {
            serial: Some(serial),
            ..Self::axfr(zone, server)
        }
    }

    /// Sets the class of the zone.
    ///
    /// The default is IN.
    #[must_use]
    pub fn with_class(mut self, class: Class) -> Self {
        self.class = class;
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Returns the name of the zone.
    pub fn zone(&self) -> &Name {
        &self.zone
    }

    /// Returns the type of transfer that is requested.
    pub fn rtype(&self) -> Rtype {
        if self.serial.is_some() {
            Rtype::IXFR
        } else {
            Rtype::AXFR
        }
    }

    /// Returns the address of the primary.
    pub fn server(&self) -> SocketAddr {
        self.server
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl ZoneTransfer {
    /// Connects to the server and runs the transfer.
    ///
    /// Both deadlines are determined when the function is called: the
    /// connection has to be established within the connect timeout and
    /// the complete transfer has to finish within the overall timeout.
    pub async fn run(&self) -> Result<XfrResult, Error> {
        let start = Instant::now();
        let deadline = deadline_after(start, self.config.timeout());
        let (connect_deadline, phase) = self.connect_deadline(start, deadline);
        let mut client = TcpClient::connect(
            self.config.local_addr(),
            self.server,
            connect_deadline,
        )
        .await
        .map_err(|err| match err {
            net::Error::Timeout(Phase::Connect) => net::Error::Timeout(phase),
            err => err,
        })?;
        let res = self.transfer(&mut client, deadline).await;
        if let Err(err) = client.close().await {
            trace!("error closing connection: {err}");
        }
        res
    }

    /// Returns the deadline for connecting.
    ///
    /// This is the earlier of the connect deadline and the overall
    /// deadline. The phase returned with it is the one a timeout while
    /// connecting is reported as.
    fn connect_deadline(
        &self,
        start: Instant,
        deadline: Instant,
    ) -> (Instant, Phase) {
        let connect = deadline_after(start, self.config.connect_timeout());
        if connect < deadline {
            (connect, Phase::Connect)
        } else {
            (deadline, Phase::Transfer)
        }
    }

    /// Runs the transfer over an existing connection.
    ///
    /// The overall timeout starts when the function is called.
    pub async fn run_with<S>(
        &self,
        client: &mut TcpClient<S>,
    ) -> Result<XfrResult, Error>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let deadline = deadline_after(Instant::now(), self.config.timeout());
        self.transfer(client, deadline).await
    }

    /// Sends queries and processes responses until the transfer is done.
    async fn transfer<S>(
        &self,
        client: &mut TcpClient<S>,
        deadline: Instant,
    ) -> Result<XfrResult, Error>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let mut rtype = self.rtype();
        'query: loop {
            let question = Question::new(self.zone.clone(), rtype, self.class);
            let query = self.query(question.clone());
            debug!("{}: sending {rtype} query to {}", self.zone, self.server);
            client.send(&query.compose()?, deadline).await?;

            let mut interp = XfrResponseInterpreter::new(
                &query,
                question,
                self.config.clone(),
            );
            let mut first = true;
            loop {
                let response =
                    Message::from_octets(&client.receive(deadline).await?)?;
                let fall_back = first
                    && rtype == Rtype::IXFR
                    && self.should_fall_back(&query, &response);
                if fall_back {
                    debug!("{}: falling back to AXFR", self.zone);
                    rtype = Rtype::AXFR;
                    continue 'query;
                }
                first = false;
                if let Some(res) = interp.interpret_response(response)? {
                    return Ok(res);
                }
            }
        }
    }

    /// Creates the query for the given question.
    ///
    /// An IXFR query carries our SOA serial in the authority section.
    fn query(&self, question: Question) -> Message {
        let ixfr = question.qtype() == Rtype::IXFR;
        let mut query = Message::query(question);
        if let (true, Some(serial)) = (ixfr, self.serial) {
            query.push_authority(Record::new(
                self.zone.clone(),
                self.class,
                Ttl::ZERO,
                Soa::new(
                    Name::root(),
                    Name::root(),
                    serial,
                    Ttl::ZERO,
                    Ttl::ZERO,
                    Ttl::ZERO,
                    Ttl::ZERO,
                )
                .into(),
            ));
        }
        query
    }

    /// Returns whether an IXFR should be retried as an AXFR.
    fn should_fall_back(&self, query: &Message, response: &Message) -> bool {
        self.config.fallback_to_axfr()
            && response.header().id() == query.header().id()
            && (response.rcode() == Rcode::NOTIMP
                || (response.rcode() == Rcode::NOERROR
                    && response.answer().is_empty()))
    }
}

/// Returns the instant `timeout` after `start`.
///
/// Saturates at thirty years, which is as good as never.
fn deadline_after(start: Instant, timeout: Duration) -> Instant {
    start.checked_add(timeout).unwrap_or_else(|| {
        start + Duration::from_secs(30 * 365 * 24 * 3600)
    })
}

//============ Tests =========================================================
