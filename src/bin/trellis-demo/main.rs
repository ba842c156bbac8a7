//! Interactive demo: add "buckets" and key/value "pairs" through a prompt.
//!
//! Ctrl+B asks for a bucket name, Ctrl+P for a key and then a value. Esc
//! cancels an open prompt or quits, Ctrl+C quits, Ctrl+Z suspends.

mod app;

use app::{Action, App};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use trellis::terminal::{Session, SessionConfig};
use trellis::Event;

#[derive(Parser)]
#[command(name = "trellis-demo", about = "Trellis widget demo")]
struct Args {
    /// Where to write the log (the screen belongs to the UI)
    #[arg(long, default_value = "trellis-demo.log")]
    log_file: PathBuf,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Draw on the main screen instead of the alternate screen
    #[arg(long)]
    no_alt_screen: bool,
}

fn main() -> trellis::Result<()> {
    let args = Args::parse();

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }
    log::info!("trellis-demo starting");

    let config = SessionConfig {
        alternate_screen: !args.no_alt_screen,
    };
    let mut session = Session::with_config(config)?;
    let (width, height) = session.size();
    let mut app = App::new(width, height);

    session.draw(|canvas| app.draw(canvas))?;
    loop {
        match session.read_event()? {
            Event::Key(key) => match app.handle_key(&key) {
                Action::Continue => {}
                Action::Suspend => {
                    session.suspend()?;
                    let (width, height) = session.size();
                    app.resize(width, height);
                }
                Action::Quit => break,
            },
            Event::Resize { width, height } => {
                session.resize(width, height);
                app.resize(width, height);
            }
        }
        session.draw(|canvas| app.draw(canvas))?;
    }

    log::info!("trellis-demo exiting");
    Ok(())
}
