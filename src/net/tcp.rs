//! A DNS transport over TCP bounded by deadlines.

use super::error::{Error, Phase};
use crate::base::wire;
use bytes::{Bytes, BytesMut};
use std::net::SocketAddr;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpSocket, TcpStream};
use tokio::time::{timeout_at, Instant};
use tracing::{debug, trace};

//------------ TcpClient -----------------------------------------------------

/// A client sending and receiving DNS messages over a stream.
///
/// Messages are framed with a two octet length prefix. The stream is
/// normally a [`TcpStream`] created via [`connect`][Self::connect] but any
/// type implementing [`AsyncRead`] and [`AsyncWrite`] can be used through
/// [`new`][Self::new].
///
/// Every operation takes an absolute deadline. If the deadline has already
/// passed, the operation fails with a timeout without touching the
/// stream. Otherwise it fails with a timeout if it hasn’t completed by the
/// deadline. Partial reads and writes are continued until the frame is
/// complete.
#[derive(Debug)]
pub struct TcpClient<S = TcpStream> {
    /// The underlying stream.
    stream: S,
}

impl TcpClient<TcpStream> {
    /// Connects to `server`.
    ///
    /// If `local` is given, the socket is bound to this address before
    /// connecting. The connection has to be established before `deadline`
    /// or the function fails with a connect timeout.
    pub async fn connect(
        local: Option<SocketAddr>,
        server: SocketAddr,
        deadline: Instant,
    ) -> Result<Self, Error> {
        check_deadline(deadline, Phase::Connect)?;
        let socket = if server.is_ipv4() {
            TcpSocket::new_v4()?
        } else {
            TcpSocket::new_v6()?
        };
        if let Some(local) = local {
            trace!("binding to {local}");
            socket.bind(local)?;
        }
        debug!("connecting to {server}");
        let stream = match timeout_at(deadline, socket.connect(server)).await {
            Ok(stream) => stream?,
            Err(_) => {
                debug!("timeout connecting to {server}");
                return Err(Error::Timeout(Phase::Connect));
            }
        };
        trace!("connected to {server}");
        Ok(Self::new(stream))
    }
}

impl<S> TcpClient<S> {
    /// Creates a client atop an already connected stream.
    pub fn new(stream: S) -> Self {
        TcpClient { stream }
    }

    /// Returns a reference to the underlying stream.
    pub fn get_ref(&self) -> &S {
        &self.stream
    }

    /// Trades the client for the underlying stream.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: AsyncRead + AsyncWrite + Unpin> TcpClient<S> {
    /// Sends a message.
    ///
    /// The message is prefixed with its length. It must therefore not be
    /// longer than 65,535 octets.
    pub async fn send(
        &mut self,
        message: &[u8],
        deadline: Instant,
    ) -> Result<(), Error> {
        check_deadline(deadline, Phase::Transfer)?;
        let frame = wire::frame(message).map_err(|_| Error::LongMessage)?;
        trace!("sending message of {} octets", message.len());
        let stream = &mut self.stream;
        let fut = async move {
            stream.write_all(&frame).await?;
            stream.flush().await
        };
        match timeout_at(deadline, fut).await {
            Ok(res) => res.map_err(Into::into),
            Err(_) => Err(Error::Timeout(Phase::Transfer)),
        }
    }

    /// Receives a message.
    ///
    /// Reads the two octet length first and then exactly that many octets.
    /// If the stream ends before a complete frame was read, fails with
    /// [`Error::ConnectionClosed`].
    pub async fn receive(&mut self, deadline: Instant) -> Result<Bytes, Error> {
        check_deadline(deadline, Phase::Transfer)?;
        let stream = &mut self.stream;
        let fut = async move {
            let len = usize::from(stream.read_u16().await?);
            let mut buf = BytesMut::zeroed(len);
            stream.read_exact(&mut buf).await?;
            Ok::<_, Error>(buf.freeze())
        };
        let res = match timeout_at(deadline, fut).await {
            Ok(res) => res?,
            Err(_) => return Err(Error::Timeout(Phase::Transfer)),
        };
        trace!("received message of {} octets", res.len());
        Ok(res)
    }

    /// Sends a message and receives the next one.
    pub async fn exchange(
        &mut self,
        message: &[u8],
        deadline: Instant,
    ) -> Result<Bytes, Error> {
        self.send(message, deadline).await?;
        self.receive(deadline).await
    }

    /// Shuts down the writing side of the stream.
    pub async fn close(&mut self) -> Result<(), Error> {
        trace!("closing connection");
        self.stream.shutdown().await.map_err(Into::into)
    }
}

/// Fails with a timeout in `phase` if `deadline` has passed.
fn check_deadline(deadline: Instant, phase: Phase) -> Result<(), Error> {
    if deadline <= Instant::now() {
        Err(Error::Timeout(phase))
    } else {
        Ok(())
    }
}

//============ Tests =========================================================
