// modem_ctrl command source
use crate::application::modem_source::{ModemInfoSource, SourceError};
use crate::infrastructure::config::CommandConfig;
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

#[derive(Debug, Clone)]
pub struct ModemCtrlSource {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl ModemCtrlSource {
    pub fn new(config: &CommandConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            timeout: config.timeout(),
        }
    }

    async fn run(&self) -> Result<Vec<u8>, SourceError> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        tracing::debug!("Running {} {}", self.program, self.args.join(" "));
        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| SourceError::Timeout(self.timeout))?
            .map_err(SourceError::Spawn)?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(SourceError::ExitStatus {
                code: output.status.code(),
                stderr,
            });
        }
        if !stderr.is_empty() {
            tracing::debug!("{} stderr: {}", self.program, stderr);
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl ModemInfoSource for ModemCtrlSource {
    async fn call_info(&self) -> Result<serde_json::Value, SourceError> {
        let stdout = String::from_utf8(self.run().await?)?;
        Ok(serde_json::from_str(&stdout)?)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use serde_json::json;

    fn shell(script: &str, timeout_secs: u64) -> ModemCtrlSource {
        ModemCtrlSource::new(&CommandConfig {
            program: "/bin/sh".to_string(),
            args: vec!["-c".to_string(), script.to_string()],
            timeout_secs,
        })
    }

    #[tokio::test]
    async fn test_parses_stdout() {
        let source = shell(r#"echo '{"info": [{"modem_info": []}]}'"#, 5);
        let value = source.call_info().await.unwrap();
        assert_eq!(value, json!({"info": [{"modem_info": []}]}));
    }

    #[tokio::test]
    async fn test_non_zero_exit() {
        let source = shell("echo 'modem busy' >&2; exit 3", 5);
        match source.call_info().await {
            Err(SourceError::ExitStatus { code, stderr }) => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "modem busy");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let source = shell("echo 'Method not found'", 5);
        assert!(matches!(source.call_info().await, Err(SourceError::Json(_))));
    }

    #[tokio::test]
    async fn test_timeout() {
        let source = ModemCtrlSource {
            timeout: Duration::from_millis(100),
            ..shell("sleep 5", 5)
        };
        assert!(matches!(
            source.call_info().await,
            Err(SourceError::Timeout(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_program() {
        let source = ModemCtrlSource::new(&CommandConfig {
            program: "/nonexistent/modem_ctrl".to_string(),
            ..CommandConfig::default()
        });
        assert!(matches!(source.call_info().await, Err(SourceError::Spawn(_))));
    }
}
