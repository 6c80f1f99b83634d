use std::time::Duration;

use clap::Parser;
use speech::{SpeechManager, Voice};

#[derive(Parser)]
#[command(about = "Queue utterances and watch the playback status")]
struct Args {
    /// Utterances to queue, spoken in order
    text: Vec<String>,
    /// Voice id to speak with
    #[arg(long, default_value = "default")]
    voice: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let manager = SpeechManager::from_env();
    for text in &args.text {
        if let Err(err) = manager.speak(text.clone(), Voice::new(args.voice.clone())) {
            eprintln!("rejected: {err}");
        }
    }

    let mut last = String::new();
    loop {
        let status = manager.current_utterance();
        if status != last {
            println!("status: {status}");
            last = status;
        }
        if !manager.speaking() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    manager.shutdown().await;
}
