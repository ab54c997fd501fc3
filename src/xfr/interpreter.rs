//! Interpreting the responses of a zone transfer.

use super::config::Config;
use super::error::{Error, ProtocolError};
use super::types::{Delta, XfrResult};
use crate::base::iana::{Opcode, Rcode, Rtype};
use crate::base::{Message, Question, Record, Serial};
use crate::rdata::RecordData;
use core::cmp::Ordering;
use core::mem;
use tracing::{debug, trace, warn};

//------------ XfrResponseInterpreter ----------------------------------------

/// An AXFR/IXFR response interpreter.
///
/// The interpreter is created for a single query and is then given the
/// response messages one by one via
/// [`interpret_response`][Self::interpret_response] until it returns the
/// outcome of the transfer.
///
/// What kind of transfer is actually happening is only known after the
/// first one or two records. An IXFR response whose first SOA record isn’t
/// newer than the serial of the query means the zone is up to date. If
/// the second record is an SOA record with the serial of the query, the
/// response is incremental. Everything else is a complete zone.
///
/// Some servers answer an IXFR for an up-to-date zone with the SOA record
/// followed by the whole zone. Because the transfer is complete after the
/// first record, the remaining records are extra data which can be
/// accepted via [`Config::set_ignore_extra_data`]. A single copy of the
/// SOA record right after the first one is always accepted.
#[derive(Debug)]
pub struct XfrResponseInterpreter {
    /// The message ID of the query.
    id: u16,

    /// The question of the query.
    question: Question,

    /// The serial given in an IXFR query.
    base_serial: Option<Serial>,

    /// The configuration providing the leniency options.
    config: Config,

    /// The serial of the zone on the server.
    end_serial: Serial,

    /// The number of messages processed.
    msg_count: usize,

    /// The number of records processed.
    rr_count: usize,

    /// The records of a complete zone.
    records: Vec<Record>,

    /// The completed deltas of an incremental response.
    deltas: Vec<Delta>,

    /// The outcome once the transfer is complete.
    result: Option<XfrResult>,

    /// The state of record processing.
    state: State,
}

impl XfrResponseInterpreter {
    /// Creates an interpreter for the responses to the given query.
    ///
    /// The base serial of an IXFR query is taken from the SOA record in
    /// its authority section.
    pub fn new(query: &Message, question: Question, config: Config) -> Self {
        let base_serial = if question.qtype() == Rtype::IXFR {
            query.authority().iter().find_map(soa_serial)
        } else {
            None
        };
        XfrResponseInterpreter {
            id: query.header().id(),
            question,
            base_serial,
            config,
            end_serial: Serial(0),
            msg_count: 0,
            rr_count: 0,
            records: Vec::new(),
            deltas: Vec::new(),
            result: None,
            state: State::InitialSoa,
        }
    }

    /// Processes the next response message.
    ///
    /// Returns the outcome of the transfer once the message completing it
    /// has been processed. Until then, returns `Ok(None)` and the next
    /// response needs to be given to the interpreter.
    pub fn interpret_response(
        &mut self,
        response: Message,
    ) -> Result<Option<XfrResult>, Error> {
        self.check_response(&response)?;
        self.msg_count += 1;

        for record in response.into_answer() {
            self.rr_count += 1;
            trace!("XFR record {}: {record:?}", self.rr_count);
            match self.process_record(record) {
                Ok(()) => {}
                Err(Error::Protocol(ProtocolError::ExtraData)) => {
                    self.tolerate(ProtocolError::ExtraData)?;
                    break;
                }
                Err(err) => return Err(err),
            }
        }
        Ok(self.result.take())
    }

    /// Returns whether the transfer is complete.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, State::UpToDate | State::Finished)
    }
}

impl XfrResponseInterpreter {
    /// Checks that a message is a valid response to the query.
    fn check_response(&self, response: &Message) -> Result<(), Error> {
        let header = response.header();
        if header.id() != self.id {
            return Err(Error::IdMismatch {
                expected: self.id,
                found: header.id(),
            });
        }
        if !header.qr() || header.opcode() != Opcode::QUERY || header.tc() {
            return Err(ProtocolError::InvalidHeader.into());
        }
        if header.rcode() != Rcode::NOERROR {
            return Err(Error::Rcode(header.rcode()));
        }

        // The first message must carry the question, later ones may.
        match response.question() {
            [] if self.msg_count > 0 => {}
            [question] => {
                if question.qname() != self.question.qname() {
                    return Err(ProtocolError::QnameMismatch.into());
                }
                if *question != self.question {
                    trace!(
                        "response question {question} doesn’t match {}",
                        self.question
                    );
                    self.tolerate(ProtocolError::QuestionMismatch)?;
                }
            }
            _ => return Err(ProtocolError::QuestionCount.into()),
        }

        if response.answer().is_empty() {
            return Err(ProtocolError::EmptyAnswer.into());
        }
        Ok(())
    }

    /// Processes a single record.
    fn process_record(&mut self, record: Record) -> Result<(), Error> {
        let serial = soa_serial(&record);

        match mem::replace(&mut self.state, State::Finished) {
            State::InitialSoa => {
                let Some(serial) = serial else {
                    return Err(ProtocolError::MissingInitialSoa.into());
                };
                self.end_serial = serial;
                if let Some(base) = self.base_serial {
                    if matches!(
                        serial.partial_cmp(&base),
                        Some(Ordering::Less | Ordering::Equal)
                    ) {
                        debug!("{}: up to date", self.question.qname());
                        self.result = Some(XfrResult::UpToDate);
                        self.state = State::UpToDate;
                        return Ok(());
                    }
                }
                self.state = State::FirstData(record);
            }

            State::FirstData(soa) => match (self.base_serial, serial) {
                (Some(base), Some(serial)) if base == serial => {
                    debug!("{}: got incremental response", self.question.qname());
                    self.state = State::Deleting(Delta::new(serial, record));
                }
                _ => {
                    debug!(
                        "{}: got nonincremental response",
                        self.question.qname()
                    );
                    self.records.push(soa);
                    self.state = State::Axfr;
                    return self.process_record(record);
                }
            },

            State::Axfr => {
                if serial.is_some() {
                    trace!("end of AXFR after {} records", self.rr_count);
                    self.result =
                        Some(XfrResult::Axfr(mem::take(&mut self.records)));
                    return Ok(());
                }
                // Old versions of BIND send cross-class A records.
                if record.rtype() == Rtype::A
                    && record.class() != self.question.qclass()
                {
                    trace!("skipping cross-class record {record}");
                } else {
                    self.records.push(record);
                }
                self.state = State::Axfr;
            }

            State::Deleting(mut delta) => {
                if let Some(serial) = serial {
                    delta.end = serial;
                    delta.adds.push(record);
                    self.state = State::Adding(delta);
                } else {
                    delta.deletes.push(record);
                    self.state = State::Deleting(delta);
                }
            }

            State::Adding(mut delta) => match serial {
                Some(serial) if serial == self.end_serial => {
                    trace!("end of IXFR after {} records", self.rr_count);
                    self.deltas.push(delta);
                    self.result =
                        Some(XfrResult::Ixfr(mem::take(&mut self.deltas)));
                }
                Some(serial) if serial != delta.end => {
                    return Err(Error::OutOfSync {
                        expected: delta.end,
                        found: serial,
                    });
                }
                Some(serial) => {
                    self.deltas.push(delta);
                    self.state = State::Deleting(Delta::new(serial, record));
                }
                None => {
                    delta.adds.push(record);
                    self.state = State::Adding(delta);
                }
            },

            State::UpToDate if serial == Some(self.end_serial) => {
                trace!("closing SOA of up-to-date zone");
            }

            State::UpToDate | State::Finished => {
                return Err(ProtocolError::ExtraData.into());
            }
        }
        Ok(())
    }

    /// Returns an error unless it is suppressed by a leniency option.
    fn tolerate(&self, err: ProtocolError) -> Result<(), Error> {
        match err.suppressed_by() {
            Some(leniency) if self.config.is_lenient(leniency) => {
                warn!("{}: ignoring {err} ({leniency})", self.question.qname());
                Ok(())
            }
            _ => Err(err.into()),
        }
    }
}

//------------ State ---------------------------------------------------------

/// The state of record processing.
#[derive(Debug)]
enum State {
    /// Waiting for the first SOA record.
    InitialSoa,

    /// Waiting for the record deciding the kind of response.
    FirstData(Record),

    /// Collecting the records of a complete zone.
    Axfr,

    /// Collecting the deletions of a delta.
    Deleting(Delta),

    /// Collecting the additions of a delta.
    Adding(Delta),

    /// The zone is up to date, a second copy of the SOA is allowed.
    UpToDate,

    /// The transfer is complete.
    Finished,
}

/// Returns the serial if the record is an SOA record.
fn soa_serial(record: &Record) -> Option<Serial> {
    match record.data() {
        RecordData::Soa(soa) => Some(soa.serial()),
        _ => None,
    }
}

//============ Tests =========================================================
