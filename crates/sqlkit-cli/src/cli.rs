use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Root,
    Render,
}

#[derive(Debug, Clone)]
pub enum Command {
    Help(HelpTopic),
    Render(RenderArgs),
}

#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub config: PathBuf,
    pub names: Vec<String>,
    pub json: bool,
    pub verbose: bool,
}

pub fn parse_args(args: &[String]) -> anyhow::Result<Command> {
    let mut it = args.iter().skip(1);
    let Some(first) = it.next() else {
        return Ok(Command::Help(HelpTopic::Root));
    };

    match first.as_str() {
        "-h" | "--help" => Ok(Command::Help(HelpTopic::Root)),
        "render" => parse_render(it.map(|s| s.as_str())),
        _ => anyhow::bail!("unknown command: {first}"),
    }
}

fn parse_render<'a>(mut it: impl Iterator<Item = &'a str>) -> anyhow::Result<Command> {
    let mut config = PathBuf::from("sqlkit.toml");
    let mut names = Vec::new();
    let mut json = false;
    let mut verbose = false;

    while let Some(token) = it.next() {
        match token {
            "-h" | "--help" => return Ok(Command::Help(HelpTopic::Render)),
            "--config" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--config requires a value");
                };
                config = PathBuf::from(v);
            }
            _ if token.starts_with("--config=") => {
                config = PathBuf::from(token.trim_start_matches("--config="));
            }
            "--name" => {
                let Some(v) = it.next() else {
                    anyhow::bail!("--name requires a value");
                };
                names.extend(split_csv(v));
            }
            _ if token.starts_with("--name=") => {
                names.extend(split_csv(token.trim_start_matches("--name=")));
            }
            "--json" => json = true,
            "-v" | "--verbose" => verbose = true,
            other => anyhow::bail!("unknown argument: {other}"),
        }
    }

    Ok(Command::Render(RenderArgs {
        config,
        names,
        json,
        verbose,
    }))
}

fn split_csv(v: &str) -> Vec<String> {
    v.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

pub fn print_help(topic: HelpTopic) {
    match topic {
        HelpTopic::Root => {
            println!(
                "\
sqlkit - render SQL statements described in TOML

USAGE:
  sqlkit <COMMAND> [OPTIONS]

COMMANDS:
  render        Validate and render statements from a config file

Run `sqlkit <command> --help` for more."
            );
        }
        HelpTopic::Render => {
            println!(
                "\
USAGE:
  sqlkit render [OPTIONS]

OPTIONS:
  --config <FILE>       Config file path (default: sqlkit.toml)
  --name <CSV>          Only render the named statements (repeatable)
  --json                One JSON object per line: {{\"name\": ..., \"sql\": ...}}
  -v, --verbose         Log config and build events to stderr
  -h, --help            Print help"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_is_root_help() {
        let cmd = parse_args(&args(&["sqlkit"])).unwrap();
        assert!(matches!(cmd, Command::Help(HelpTopic::Root)));
    }

    #[test]
    fn parse_render_defaults() {
        let cmd = parse_args(&args(&["sqlkit", "render"])).unwrap();
        let Command::Render(r) = cmd else {
            panic!("expected render");
        };
        assert_eq!(r.config, PathBuf::from("sqlkit.toml"));
        assert!(r.names.is_empty());
        assert!(!r.json);
        assert!(!r.verbose);
    }

    #[test]
    fn parse_render_with_options() {
        let cmd = parse_args(&args(&[
            "sqlkit",
            "render",
            "--config=db/queries.toml",
            "--name",
            "a, b",
            "--name=c",
            "--json",
            "-v",
        ]))
        .unwrap();
        let Command::Render(r) = cmd else {
            panic!("expected render");
        };
        assert_eq!(r.config, PathBuf::from("db/queries.toml"));
        assert_eq!(r.names, vec!["a", "b", "c"]);
        assert!(r.json);
        assert!(r.verbose);
    }

    #[test]
    fn render_help() {
        let cmd = parse_args(&args(&["sqlkit", "render", "--help"])).unwrap();
        assert!(matches!(cmd, Command::Help(HelpTopic::Render)));
    }

    #[test]
    fn rejects_unknown() {
        assert!(parse_args(&args(&["sqlkit", "explode"])).is_err());
        assert!(parse_args(&args(&["sqlkit", "render", "--bogus"])).is_err());
        assert!(parse_args(&args(&["sqlkit", "render", "--config"])).is_err());
    }
}
