use std::io::{BufRead, Write};

use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CheckDefault,
    CheckCustom,
    LoadFile,
    Info,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::CheckDefault),
            "2" => Some(MenuChoice::CheckCustom),
            "3" => Some(MenuChoice::LoadFile),
            "4" => Some(MenuChoice::Info),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Line oriented user input.
/// Lines arrive over a channel so a pending read never blocks runtime shutdown on Ctrl-C.
pub struct Console {
    lines: mpsc::UnboundedReceiver<String>,
}

impl Console {
    /// Read stdin on a dedicated thread.
    pub fn stdin() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        std::thread::spawn(move || {
            for line in std::io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        log::warn!("Failed to read from stdin: {e}");
                        break;
                    }
                }
            }
        });
        Self::from_receiver(rx)
    }

    pub fn from_receiver(lines: mpsc::UnboundedReceiver<String>) -> Self {
        Self { lines }
    }

    /// Next line of input, `None` once input is closed.
    pub async fn read_line(&mut self) -> Option<String> {
        self.lines.recv().await
    }

    pub async fn prompt(&mut self, text: &str) -> Option<String> {
        print!("{text}");
        let _ = std::io::stdout().flush();
        self.read_line().await
    }

    /// Ask until a valid menu entry is given.
    pub async fn choose(&mut self) -> Option<MenuChoice> {
        loop {
            let input = self.prompt("\n👉 Enter your choice (1-5): ").await?;
            match MenuChoice::parse(&input) {
                Some(choice) => return Some(choice),
                None => println!("❌ Please enter a number between 1-5"),
            }
        }
    }

    /// Collect targets one per line until a blank line. A blank line before the first
    /// target asks again; closed input ends collection with whatever was entered.
    pub async fn read_targets(&mut self) -> Vec<String> {
        println!("\nEnter websites (one per line). Press Enter twice to finish:");

        let mut targets = Vec::new();
        while let Some(line) = self.read_line().await {
            let target = line.trim();
            if target.is_empty() {
                if targets.is_empty() {
                    println!("❌ Please enter at least one website");
                    continue;
                }
                break;
            }
            targets.push(target.to_string());
        }
        targets
    }

    /// Wait for Enter. Returns false once input is closed.
    pub async fn pause(&mut self) -> bool {
        self.prompt("\nPress Enter to continue...").await.is_some()
    }
}
