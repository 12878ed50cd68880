//! Newline-delimited JSON-RPC over a pair of byte streams.
//!
//! Every line read is one JSON-RPC request (or batch); every response is
//! written on its own line. Notifications produce no output. Lines are never
//! logged because they may carry passwords.

use std::io::{self, BufRead, Write};

use jsonrpc_core::{self as rpc, Failure, Id, IoHandler, Version};

/// Serve requests from `reader` until it is exhausted, answering on `writer`.
///
/// Returns how many requests were handled. A line that is not valid UTF-8
/// is answered with a JSON-RPC parse error, like any other malformed line.
pub fn serve<R, W>(mut reader: R, mut writer: W, handler: &IoHandler) -> io::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut handled = 0;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => handler.handle_request_sync(line.trim_end_matches(&['\n', '\r'][..])),
            Err(_) => {
                log::warn!("Received a request line that is not valid UTF-8");
                Some(serde_json::to_string(&parse_error())?)
            }
        };

        if let Some(response) = response {
            writeln!(writer, "{}", response)?;
            writer.flush()?;
        }
        handled += 1;
    }

    log::debug!("Input closed after {} requests", handled);

    Ok(handled)
}

fn parse_error() -> Failure {
    Failure {
        jsonrpc: Some(Version::V2),
        error: rpc::Error::parse_error(),
        id: Id::Null,
    }
}
