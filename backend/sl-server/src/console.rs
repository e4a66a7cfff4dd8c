use crate::command::ConsoleCommand;
use crate::error::{Result as ServerErrorResult, ServerError};

use sl_devops::StoryCreator;

use log::info;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

pub const USAGE: &str =
    r#"Enter commands like: create story with title "Story title" and description "Story details"."#;

const PROMPT: &str = "> ";

/// Line-based console over any reader/writer pair.
///
/// Runs until `quit`/`exit` or end of input. A failed story is reported and
/// the loop keeps going; only I/O failures end it early.
pub struct Console<'a, R, W> {
    creator: &'a dyn StoryCreator,
    reader: R,
    writer: W,
}

impl<'a, R, W> Console<'a, R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(creator: &'a dyn StoryCreator, reader: R, writer: W) -> Self {
        Self {
            creator,
            reader,
            writer,
        }
    }

    pub async fn run(mut self) -> ServerErrorResult<()> {
        self.write_line(&format!("storyline v{} interactive mode", env!("CARGO_PKG_VERSION")))
            .await?;
        self.write_line(USAGE).await?;
        self.write_line("Type 'quit' or 'exit' to leave.\n").await?;

        let mut line = String::new();
        loop {
            self.write(PROMPT).await?;

            line.clear();
            let read = self
                .reader
                .read_line(&mut line)
                .await
                .map_err(|e| ServerError::console_io("failed to read input", e))?;
            if read == 0 {
                self.write_line("").await?;
                break;
            }

            match ConsoleCommand::parse(&line) {
                ConsoleCommand::Blank => {}
                ConsoleCommand::Quit => break,
                ConsoleCommand::CreateStory { title, description } => {
                    self.create_story(&title, &description).await?;
                }
                ConsoleCommand::Unrecognised => {
                    self.write_line("Unrecognised command.").await?;
                    self.write_line(USAGE).await?;
                }
            }
        }

        info!("Interactive session ended");
        Ok(())
    }

    async fn create_story(&mut self, title: &str, description: &str) -> ServerErrorResult<()> {
        match self.creator.create_story(title, description).await {
            Ok(created) => self.write_line(&created.confirmation()).await,
            Err(e) => self.write_line(&format!("Error: {e}")).await,
        }
    }

    async fn write_line(&mut self, text: &str) -> ServerErrorResult<()> {
        self.write(text).await?;
        self.write("\n").await
    }

    async fn write(&mut self, text: &str) -> ServerErrorResult<()> {
        self.writer
            .write_all(text.as_bytes())
            .await
            .map_err(|e| ServerError::console_io("failed to write output", e))?;
        self.writer
            .flush()
            .await
            .map_err(|e| ServerError::console_io("failed to flush output", e))
    }
}

/// Run the console on the process's stdin/stdout.
pub async fn run_interactive(creator: &dyn StoryCreator) -> ServerErrorResult<()> {
    Console::new(
        creator,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .run()
    .await
}
