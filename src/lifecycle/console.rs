//! Line-oriented prompt over an async reader/writer pair.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Writes prompts and reads one answer line at a time.
///
/// End of input reads as an empty answer.
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Prints `query` (without a trailing newline) and returns the answer with
    /// the line terminator removed.
    pub async fn ask(&mut self, query: &str) -> std::io::Result<String> {
        self.writer.write_all(query.as_bytes()).await?;
        self.writer.flush().await?;

        let mut line = String::new();
        self.reader.read_line(&mut line).await?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Prints one line.
    pub async fn say(&mut self, line: &str) -> std::io::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await
    }

    /// Releases the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ask_and_say() {
        let input: &[u8] = b"42\r\nsecond\n";
        let mut console = Console::new(input, Vec::new());

        assert_eq!(console.ask("Number? ").await.unwrap(), "42");
        assert_eq!(console.ask("Again? ").await.unwrap(), "second");
        assert_eq!(console.ask("Gone? ").await.unwrap(), "");
        console.say("done").await.unwrap();

        let output = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(output, "Number? Again? Gone? done\n");
    }
}
