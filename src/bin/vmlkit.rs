use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vmlkit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scene JSON file to HTML.
    Render(RenderArgs),
    /// List the built-in color schemes.
    Schemes,
    /// List the registered component tags.
    Tags,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Color scheme written onto every presentation root.
    #[arg(long)]
    scheme: Option<String>,

    /// Timeline sample in seconds; repeat for several snapshots.
    #[arg(long = "time")]
    times: Vec<f64>,

    /// Output HTML path. Several samples write `<stem>.<n>.html` next to it. Defaults to stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Schemes => {
            for s in vmlkit::SCHEMES {
                println!("{}", s.name);
            }
            Ok(())
        }
        Command::Tags => {
            let reg = vmlkit::Registry::with_builtins();
            for tag in reg.tags() {
                match reg.kind(tag) {
                    Some(vmlkit::EntryKind::Alias { of }) => println!("{tag} -> {of}"),
                    _ => println!("{tag}"),
                }
            }
            Ok(())
        }
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let def = vmlkit::SceneDef::from_path(&args.in_path)?;
    let mut scene = vmlkit::Scene::with_builtins();
    let top = scene
        .load(&def)
        .with_context(|| format!("load scene '{}'", args.in_path.display()))?;

    let roots = presentation_roots(&scene, top);
    if let Some(name) = &args.scheme {
        for &root in &roots {
            scene
                .apply_scheme(root, name)
                .with_context(|| format!("apply scheme '{name}'"))?;
        }
    }

    if args.times.is_empty() {
        return emit(args.out.as_deref(), &scene.to_html());
    }

    let several = args.times.len() > 1;
    for (i, &time) in args.times.iter().enumerate() {
        for &root in &roots {
            scene.tick(root, time);
        }
        let html = scene.to_html();
        match &args.out {
            Some(out) if several => emit(Some(numbered(out, i).as_path()), &html)?,
            Some(out) => emit(Some(out.as_path()), &html)?,
            None => {
                if several {
                    println!("<!-- t={time} -->");
                }
                emit(None, &html)?;
            }
        }
    }
    Ok(())
}

fn presentation_roots(scene: &vmlkit::Scene, top: vmlkit::NodeId) -> Vec<vmlkit::NodeId> {
    let doc = scene.doc();
    let mut roots = Vec::new();
    for tag in &scene.opts().root_tags {
        roots.extend(doc.elements_by_tag(top, tag));
    }
    roots.sort();
    roots.dedup();
    roots
}

fn numbered(out: &Path, index: usize) -> PathBuf {
    let stem = out
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scene".to_owned());
    out.with_file_name(format!("{stem}.{index}.html"))
}

fn emit(out: Option<&Path>, html: &str) -> anyhow::Result<()> {
    let Some(out) = out else {
        println!("{html}");
        return Ok(());
    };
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, html).with_context(|| format!("write html '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}
