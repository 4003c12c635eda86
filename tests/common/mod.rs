use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::io::Write;
use titlenorm::{NormaliserConfig, TitleNormaliser};

#[allow(dead_code)]
pub fn normaliser_with(vocabulary: &[&str], threshold: f64) -> TitleNormaliser {
    TitleNormaliser::with_config(NormaliserConfig {
        vocabulary: vocabulary.iter().map(|s| s.to_string()).collect(),
        threshold,
    })
    .expect("Failed to build normaliser")
}

/// Run the CLI isolated from the user's config dir, feeding `stdin` if given
#[allow(dead_code)]
pub fn run_cli(config_home: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    let bin_path = env!("CARGO_BIN_EXE_titlenorm");

    let mut child = Command::new(bin_path)
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn titlenorm");

    {
        let mut child_stdin = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            child_stdin
                .write_all(input.as_bytes())
                .expect("Failed to write stdin");
        }
    }

    child.wait_with_output().expect("Failed to wait for titlenorm")
}
