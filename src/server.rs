//! HTTP front end.
//!
//! Each route resolves its own [`Surface`] and renders on a blocking worker,
//! so concurrent requests share nothing but the immutable [`Renderer`].
//! The document is streamed to the client in chunks as it is written.

use std::io::{self, Write};
use std::net::SocketAddr;

use axum::body::Body;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use futures::stream;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use crate::renderer::{RenderError, Renderer, CONTENT_TYPE};
use crate::surface::Surface;

/// Bytes buffered before a chunk is handed to the response body.
const CHUNK_SIZE: usize = 16 * 1024;
/// Chunks in flight between the render worker and the connection.
const CHANNEL_DEPTH: usize = 8;

/// Build the router. Unmatched paths render the ripple, like `/`.
pub fn router(renderer: Renderer) -> Router {
    Router::new()
        .route("/", get(|state| serve(state, Surface::Ripple)))
        .route("/eggbox", get(|state| serve(state, Surface::Eggbox)))
        .route("/saddle", get(|state| serve(state, Surface::Saddle)))
        .fallback(|state| serve(state, Surface::Ripple))
        .with_state(renderer)
}

/// Bind `addr` and serve until the process exits.
pub async fn run(addr: SocketAddr, renderer: Renderer) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    log::info!("serving surfaces on http://{}", listener.local_addr()?);
    axum::serve(listener, router(renderer)).await?;
    Ok(())
}

async fn serve(State(renderer): State<Renderer>, surface: Surface) -> Response {
    log::debug!("request for {}", surface.name());

    let (tx, rx) = mpsc::channel(CHANNEL_DEPTH);
    tokio::task::spawn_blocking(move || {
        let mut out = ChunkWriter::new(tx);
        let result = renderer
            .render(surface, &mut out)
            .and_then(|_| out.flush().map_err(RenderError::from));
        if let Err(e) = result {
            log::warn!("render of {} stopped: {}", surface.name(), e);
        }
    });

    let chunks = stream::unfold(rx, |mut rx| async move {
        rx.recv().await.map(|chunk| (Ok::<_, io::Error>(chunk), rx))
    });
    ([(header::CONTENT_TYPE, CONTENT_TYPE)], Body::from_stream(chunks)).into_response()
}

/// Blocking [`Write`] sink that forwards fixed-size chunks over a channel.
///
/// Once the receiver is gone (client disconnected) every send fails with
/// `BrokenPipe`, which aborts the render.
struct ChunkWriter {
    tx: mpsc::Sender<Vec<u8>>,
    buf: Vec<u8>,
}

impl ChunkWriter {
    fn new(tx: mpsc::Sender<Vec<u8>>) -> Self {
        Self {
            tx,
            buf: Vec::with_capacity(CHUNK_SIZE),
        }
    }

    fn send(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let chunk = std::mem::replace(&mut self.buf, Vec::with_capacity(CHUNK_SIZE));
        self.tx
            .blocking_send(chunk)
            .map_err(|_| io::Error::new(io::ErrorKind::BrokenPipe, "client disconnected"))
    }
}

impl Write for ChunkWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        if self.buf.len() >= CHUNK_SIZE {
            self.send()?;
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.send()
    }
}
