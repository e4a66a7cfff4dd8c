use crate::protocol::error_codes;
use crate::{JsonRpcResponse, McpError, McpProtocolHandler, McpResult};

use log::{debug, info, warn};
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader,
};

/// Longest accepted message line, newline excluded.
pub const MAX_MESSAGE_BYTES: usize = 1024 * 1024;

/// Serve newline-delimited JSON-RPC until the reader reaches EOF.
///
/// Each response is written as a single line and flushed before the next
/// message is read, so a request never overlaps the one before it. A line
/// that is not UTF-8 or exceeds [`MAX_MESSAGE_BYTES`] is answered with an
/// error and the session continues.
pub async fn serve<R, W>(
    handler: &McpProtocolHandler,
    mut reader: R,
    mut writer: W,
) -> McpResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = (&mut reader)
            .take(MAX_MESSAGE_BYTES as u64 + 1)
            .read_until(b'\n', &mut buf)
            .await
            .map_err(|e| McpError::io("failed to read message", e))?;
        if read == 0 {
            break;
        }

        if buf.last() != Some(&b'\n') && buf.len() > MAX_MESSAGE_BYTES {
            warn!("Discarding JSON-RPC message longer than {MAX_MESSAGE_BYTES} bytes");
            discard_rest_of_line(&mut reader).await?;
            let response = JsonRpcResponse::error(
                None,
                error_codes::INVALID_REQUEST,
                format!("Message exceeds {MAX_MESSAGE_BYTES} bytes"),
            );
            write_response(&mut writer, &response).await?;
            continue;
        }

        let message = match std::str::from_utf8(&buf) {
            Ok(message) => message.trim(),
            Err(e) => {
                warn!("Discarding JSON-RPC message that is not UTF-8: {e}");
                let response =
                    JsonRpcResponse::error(None, error_codes::PARSE_ERROR, "Parse error");
                write_response(&mut writer, &response).await?;
                continue;
            }
        };
        if message.is_empty() {
            continue;
        }

        if let Some(response) = handler.handle_message(message).await {
            write_response(&mut writer, &response).await?;
        }
    }

    debug!("Input closed");
    Ok(())
}

/// Serve JSON-RPC over the process's stdin/stdout.
pub async fn serve_stdio(handler: &McpProtocolHandler) -> McpResult<()> {
    info!("MCP server listening on stdio");
    serve(
        handler,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await?;
    info!("MCP stdio session ended");
    Ok(())
}

async fn write_response<W>(writer: &mut W, response: &JsonRpcResponse) -> McpResult<()>
where
    W: AsyncWrite + Unpin,
{
    let mut encoded = serde_json::to_string(response).map_err(McpError::encode)?;
    encoded.push('\n');
    writer
        .write_all(encoded.as_bytes())
        .await
        .map_err(|e| McpError::io("failed to write response", e))?;
    writer
        .flush()
        .await
        .map_err(|e| McpError::io("failed to flush response", e))
}

/// Skip input up to and including the next newline without buffering it.
async fn discard_rest_of_line<R>(reader: &mut R) -> McpResult<()>
where
    R: AsyncBufRead + Unpin,
{
    loop {
        let chunk = reader
            .fill_buf()
            .await
            .map_err(|e| McpError::io("failed to read message", e))?;
        if chunk.is_empty() {
            return Ok(());
        }

        match chunk.iter().position(|b| *b == b'\n') {
            Some(end) => {
                reader.consume(end + 1);
                return Ok(());
            }
            None => {
                let len = chunk.len();
                reader.consume(len);
            }
        }
    }
}
