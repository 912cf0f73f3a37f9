use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geokit::api::GeomCfg;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod queries;

#[derive(Parser)]
#[command(name = "geokit")]
#[command(about = "Answer 2D geometry queries from JSON files")]
struct Cmd {
    /// Distance under which two intersection points count as one
    #[arg(long, default_value_t = GeomCfg::default().eps_merge)]
    eps_merge: f64,

    /// Log every answer
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Answer every query in a JSON array
    Run {
        #[arg(long)]
        input: PathBuf,
        /// Write answers here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the library version as JSON
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let cfg = GeomCfg {
        eps_merge: cmd.eps_merge,
        ..GeomCfg::default()
    };
    match cmd.action {
        Action::Run { input, out } => run(&input, out.as_deref(), &cfg),
        Action::Report => report(),
    }
}

fn run(input: &Path, out: Option<&Path>, cfg: &GeomCfg) -> Result<()> {
    tracing::info!(input = %input.display(), eps_merge = cfg.eps_merge, "run");
    let answers = queries::run_file(input, cfg)?;
    let body = serde_json::to_vec_pretty(&answers)?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating output dir {}", parent.display()))?;
                }
            }
            std::fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(out = %path.display(), count = answers.len(), "answers written");
        }
        None => println!("{}", String::from_utf8_lossy(&body)),
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "geokit": geokit::VERSION,
        "code_rev": option_env!("GIT_COMMIT").unwrap_or("unknown"),
        "defaults": {
            "eps_merge": GeomCfg::default().eps_merge,
            "eps_approx": GeomCfg::default().eps_approx,
        }
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn run_writes_answers_into_new_dir() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("q.json");
        std::fs::write(
            &input,
            r#"[{"op":"rect_intersection",
                 "a":{"x":0,"y":0,"width":10,"height":10},
                 "b":{"x":10,"y":0,"width":5,"height":5}}]"#,
        )
        .unwrap();
        let out = dir.path().join("nested").join("answers.json");
        run(&input, Some(&out), &GeomCfg::default()).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        // Edge-touching rects do not overlap.
        assert_eq!(
            parsed[0]["rect"],
            serde_json::json!({"x": 0.0, "y": 0.0, "width": 0.0, "height": 0.0})
        );
    }

    #[test]
    fn bad_query_names_its_index() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("q.json");
        std::fs::write(
            &input,
            r#"[{"op":"rect_union","a":{"x":0,"y":0,"width":1,"height":1},
                                 "b":{"x":0,"y":0,"width":1,"height":1}},
                {"op":"point_on_polygon","coords":[],"distance":1}]"#,
        )
        .unwrap();
        let err = run(&input, None, &GeomCfg::default()).unwrap_err();
        assert!(format!("{err:#}").contains("query #1 (point_on_polygon)"));
    }
}
