//! Shared fixtures for the bundler integration tests

use std::collections::BTreeMap;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <link rel="stylesheet" href="style.css">
    <script type="module">import init from "./playground.js"; init();</script>
  </head>
  <body></body>
</html>
"#;

pub const STYLE_CSS: &str = "body { font-family: sans-serif; margin: 0; }\n";

/// Behaves like `wasm-pack build --target web --out-dir <dir>` as far as the
/// bundler can tell. Exits 64 if called with any other arguments.
pub const FAKE_WASM_PACK: &str = r#"#!/bin/sh
[ "$1" = build ] && [ "$2" = --target ] && [ "$3" = web ] && [ "$4" = --out-dir ] || exit 64
echo "[INFO]: Compiling to Wasm..." >&2
mkdir -p "$5"
printf '\000asm\001\000\000\000' > "$5/playground_bg.wasm"
printf 'export default async function init() {}\n' > "$5/playground.js"
printf 'export default function init(): Promise<void>;\n' > "$5/playground.d.ts"
printf '{"name":"playground"}\n' > "$5/package.json"
"#;

pub const BROKEN_WASM_PACK: &str = r#"#!/bin/sh
echo "error[E0425]: cannot find value \`x\` in this scope" >&2
exit 101
"#;

/// A project directory plus a directory holding the fake compiler.
pub struct Fixture {
    pub project: TempDir,
    pub tools: TempDir,
}

impl Fixture {
    /// Well-formed layout with the given compiler script installed as `wasm-pack`.
    pub fn new(compiler_script: &str) -> Self {
        let project = tempfile::tempdir().unwrap();
        let src = project.path().join("src");
        std::fs::create_dir(&src).unwrap();
        std::fs::write(
            project.path().join("Cargo.toml"),
            "[package]\nname = \"playground\"\nversion = \"0.1.0\"\n",
        )
        .unwrap();
        std::fs::write(src.join("lib.rs"), "").unwrap();
        std::fs::write(src.join("index.html"), INDEX_HTML).unwrap();
        std::fs::write(src.join("style.css"), STYLE_CSS).unwrap();

        let tools = tempfile::tempdir().unwrap();
        let tool = tools.path().join("wasm-pack");
        std::fs::write(&tool, compiler_script).unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

        Self { project, tools }
    }

    pub fn path(&self) -> &Path {
        self.project.path()
    }

    pub fn dist(&self) -> PathBuf {
        self.project.path().join("dist")
    }

    /// `PATH` with the fake compiler first.
    pub fn path_env(&self) -> std::ffi::OsString {
        let mut paths = vec![self.tools.path().to_path_buf()];
        if let Some(existing) = std::env::var_os("PATH") {
            paths.extend(std::env::split_paths(&existing));
        }
        std::env::join_paths(paths).unwrap()
    }

    /// Bundler binary set up to run in the project with the fake compiler.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("web_bundle").unwrap();
        cmd.current_dir(self.path())
            .env("PATH", self.path_env())
            .env_remove("RUST_LOG");
        cmd
    }
}

/// Every file under `dir` with its contents, keyed by relative path.
pub fn snapshot(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .map(|e| e.unwrap())
        .filter(|e| e.file_type().is_file())
        .map(|e| {
            let rel = e.path().strip_prefix(dir).unwrap().to_path_buf();
            (rel, std::fs::read(e.path()).unwrap())
        })
        .collect()
}
