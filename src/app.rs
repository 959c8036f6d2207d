use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::probe_config::ProbeConfig;
use crate::http_probe::prelude::*;
use crate::report::Summary;
use crate::report::writer::save_report;
use crate::resolver::Resolve;
use crate::targets::read_targets_file;
use crate::ui::{self, GOODBYE, console::{Console, MenuChoice}};

/// Ties the batch runner, the report writer and the terminal together.
pub struct App<R> {
    config: ProbeConfig,
    runner: BatchRunner,
    resolver: R,
}

impl<R: Resolve> App<R> {
    pub fn new(config: ProbeConfig, runner: BatchRunner, resolver: R) -> Self {
        Self {
            config,
            runner,
            resolver,
        }
    }

    /// Probe the targets, printing one table row per result as it arrives.
    pub async fn check(&self, targets: &[String]) -> Vec<ProbeResult> {
        ui::print_checking_header();
        self.runner
            .probe_all(targets, |result| println!("{}", ui::progress_row(result)))
            .await
    }

    /// Write the report for a finished batch and print the quick summary.
    pub async fn save(&self, results: &[ProbeResult]) -> anyhow::Result<Option<PathBuf>> {
        if results.is_empty() {
            return Ok(None);
        }

        ui::print_section("💾 SAVING REPORT");
        let path = save_report(&self.config.report_dir, results, &Local::now(), &self.resolver).await?;
        if let Some(path) = &path {
            ui::print_saved(path, &Summary::from_results(results));
        }
        Ok(path)
    }

    pub async fn check_and_report(&self, targets: &[String]) -> anyhow::Result<Option<PathBuf>> {
        let results = self.check(targets).await;
        self.save(&results).await
    }

    /// Non-interactive run over the given targets.
    pub async fn check_once(&self, targets: &[String], write_report: bool) -> anyhow::Result<()> {
        if targets.is_empty() {
            println!("❌ No websites to check!");
            return Ok(());
        }

        let results = self.check(targets).await;
        if write_report {
            self.save(&results).await?;
        } else {
            let summary = Summary::from_results(&results);
            println!(
                "\n📊 Quick Summary: {} Online, {} Offline",
                summary.online, summary.offline
            );
        }
        Ok(())
    }

    /// The menu loop. Returns when the user exits or input is closed.
    /// A failing action is reported and the menu is shown again.
    pub async fn interactive(&self, console: &mut Console) -> anyhow::Result<()> {
        ui::clear_screen();
        ui::print_banner();

        loop {
            ui::print_menu();
            let Some(choice) = console.choose().await else {
                println!("\n{GOODBYE}");
                return Ok(());
            };

            let outcome = match choice {
                MenuChoice::CheckDefault => {
                    ui::print_section("🚀 CHECKING DEFAULT WEBSITES");
                    self.check_and_report(&self.config.default_targets).await
                }
                MenuChoice::CheckCustom => self.check_custom(console).await,
                MenuChoice::LoadFile => self.check_file(console).await,
                MenuChoice::Info => {
                    ui::print_info();
                    Ok(None)
                }
                MenuChoice::Exit => {
                    println!("\n🎉 Thanks for using Website Status Checker!");
                    println!("👋 Goodbye!");
                    return Ok(());
                }
            };

            if let Err(e) = outcome {
                log::error!("Menu action failed: {e:?}");
                println!("\n❌ An error occurred: {e:#}");
            }

            if !console.pause().await {
                println!("\n{GOODBYE}");
                return Ok(());
            }
            ui::clear_screen();
            ui::print_banner();
        }
    }

    async fn check_custom(&self, console: &mut Console) -> anyhow::Result<Option<PathBuf>> {
        ui::print_section("📝 CUSTOM WEBSITES CHECK");
        let targets = console.read_targets().await;
        if targets.is_empty() {
            println!("❌ No websites entered!");
            return Ok(None);
        }
        self.check_and_report(&targets).await
    }

    async fn check_file(&self, console: &mut Console) -> anyhow::Result<Option<PathBuf>> {
        ui::print_section("📖 LOAD WEBSITES FROM FILE");
        let Some(path) = console.prompt("\n📁 Path to targets file: ").await else {
            return Ok(None);
        };

        let targets = read_targets_file(Path::new(path.trim()))?;
        if targets.is_empty() {
            println!("❌ No websites found in {}", path.trim());
            return Ok(None);
        }
        self.check_and_report(&targets).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::resolver::test_support::StaticResolver;
    use crate::ui::console::test_support::scripted;
    use wiremock::matchers::path;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_app(report_dir: &Path, default_targets: Vec<String>) -> App<StaticResolver> {
        let config = ProbeConfig {
            delay_ms: 0,
            report_dir: report_dir.to_path_buf(),
            default_targets,
            ..ProbeConfig::default()
        };
        let prober = Prober::new(Duration::from_secs(5), "webcheck-test").expect("client should build");
        let runner = BatchRunner::new(prober).with_delay(Duration::ZERO);
        App::new(config, runner, StaticResolver::default())
    }

    async fn ok_server() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(path("/ok"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        server
    }

    fn report_files(dir: &Path) -> Vec<PathBuf> {
        std::fs::read_dir(dir)
            .expect("readable")
            .map(|entry| entry.expect("entry").path())
            .collect()
    }

    #[tokio::test]
    async fn test_check_and_report_writes_report() {
        let server = ok_server().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let app = test_app(dir.path(), vec![]);
        let targets = vec![
            format!("{}/ok", server.uri()),
            format!("{}/missing", server.uri()),
            "nonexistent.invalid".to_string(),
        ];

        let path = app
            .check_and_report(&targets)
            .await
            .expect("run should succeed")
            .expect("report written");

        let contents = std::fs::read_to_string(path).expect("readable");
        assert!(contents.contains("• Websites Checked: 3\n• Online: 1\n• Offline: 1\n• Errors: 1\n"));
        assert!(contents.contains("IP Address: 127.0.0.1"));
    }

    #[tokio::test]
    async fn test_check_once_without_report() {
        let server = ok_server().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let app = test_app(dir.path(), vec![]);

        app.check_once(&[format!("{}/ok", server.uri())], false)
            .await
            .expect("run should succeed");

        assert!(report_files(dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_check_once_empty_targets() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = test_app(dir.path(), vec![]);

        app.check_once(&[], true).await.expect("nothing to do is fine");

        assert!(report_files(dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_interactive_custom_run_then_exit() {
        let server = ok_server().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let app = test_app(dir.path(), vec![]);
        let target = format!("{}/ok", server.uri());
        let mut console = scripted(&["7", "2", "", &target, "", "", "5"]);

        app.interactive(&mut console).await.expect("session ends cleanly");

        let files = report_files(dir.path());
        assert_eq!(files.len(), 1);
        let name = files[0].file_name().and_then(|n| n.to_str()).expect("utf-8 name");
        assert!(name.starts_with("website_report_") && name.ends_with(".txt"));
    }

    #[tokio::test]
    async fn test_interactive_default_targets() {
        let server = ok_server().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let app = test_app(dir.path(), vec![format!("{}/missing", server.uri())]);
        let mut console = scripted(&["1", "", "5"]);

        app.interactive(&mut console).await.expect("session ends cleanly");

        assert_eq!(report_files(dir.path()).len(), 1);
    }

    #[tokio::test]
    async fn test_interactive_custom_with_closed_input_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = test_app(dir.path(), vec![]);
        let mut console = scripted(&["2"]);

        app.interactive(&mut console).await.expect("session ends cleanly");

        assert!(report_files(dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_interactive_missing_file_is_reported_not_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let app = test_app(dir.path(), vec![]);
        let missing = dir.path().join("missing.txt");
        let missing = missing.to_str().expect("utf-8 path");
        let mut console = scripted(&["3", missing, "", "4", "", "5"]);

        app.interactive(&mut console).await.expect("session keeps going after an error");

        assert!(report_files(dir.path()).is_empty());
    }

    #[tokio::test]
    async fn test_interactive_load_targets_from_file() {
        let server = ok_server().await;
        let dir = tempfile::tempdir().expect("tempdir");
        let reports = dir.path().join("reports");
        let app = test_app(&reports, vec![]);
        let list = dir.path().join("sites.txt");
        std::fs::write(&list, format!("# local\n{}/ok\n", server.uri())).expect("write list");
        let list = list.to_str().expect("utf-8 path");
        let mut console = scripted(&["3", list, "", "5"]);

        app.interactive(&mut console).await.expect("session ends cleanly");

        assert_eq!(report_files(&reports).len(), 1);
    }
}
