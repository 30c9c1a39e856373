use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use anyhow::Context;
use log::{debug, warn};
use tempfile::TempDir;
use thiserror::Error;

use crate::utils;

const INPUT_FILE: &str = "timesheet.tex";
const OUTPUT_FILE: &str = "timesheet.pdf";

#[derive(Debug, Error)]
pub enum RenderingError {
    #[error("failed to run `{}`: {source}", .latex_mk_path.display())]
    RunError {
        latex_mk_path: PathBuf,
        source: io::Error,
    },
    #[error("latexmk failed with status {status:?}:\n{stdout}\n{stderr}")]
    Failed {
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },
    #[error("failed to read the compiled pdf: {0}")]
    ReadOutputFile(io::Error),
}

impl RenderingError {
    fn failed(output: &Output) -> Self {
        Self::Failed {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Compiles a latex document with `latexmk` in a temporary directory.
pub struct TexRender {
    /// Path to latexmk.
    latex_mk_path: PathBuf,
    /// Temporary directory holding the document and its assets.
    working_dir: TempDir,
    /// Where the working directory is copied to if compiling fails.
    preserve_dir: Option<PathBuf>,
}

impl TexRender {
    pub fn from_bytes(source: impl AsRef<[u8]>) -> anyhow::Result<Self> {
        let working_dir = TempDir::new()?;
        utils::write(working_dir.path().join(INPUT_FILE), source.as_ref())?;

        Ok(Self {
            latex_mk_path: "latexmk".into(),
            working_dir,
            preserve_dir: None,
        })
    }

    /// Adds a file that the document includes, like an image.
    pub fn add_asset_from_bytes(
        &mut self,
        filepath: impl AsRef<Path>,
        bytes: &[u8],
    ) -> io::Result<()> {
        let workdir_filepath = self.working_dir.path().join(filepath.as_ref());

        if let Some(parent) = workdir_filepath.parent() {
            utils::create_dir_all(parent)?;
        }

        utils::write(workdir_filepath, bytes)
    }

    pub fn preserve_dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.preserve_dir = Some(path.into());
        self
    }

    pub fn latex_mk_path(&mut self, latex_mk_path: impl Into<PathBuf>) -> &mut Self {
        self.latex_mk_path = latex_mk_path.into();
        self
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.latex_mk_path);
        cmd.args([
            "-interaction=nonstopmode",
            "-halt-on-error",
            "-file-line-error",
            "-pdf",
            "-cd",
            "-no-shell-escape",
        ]);

        cmd.arg(self.working_dir.path().join(INPUT_FILE));
        cmd.current_dir(self.working_dir.path());

        cmd
    }

    fn preserve(&self, path: &Path) -> anyhow::Result<()> {
        utils::create_dir_all(path)?;
        fs_extra::dir::copy(
            self.working_dir.path(),
            path,
            &fs_extra::dir::CopyOptions {
                overwrite: true,
                skip_exist: false,
                content_only: true,
                ..Default::default()
            },
        )
        .with_context(|| {
            format!(
                "failed to copy `{}` to `{}`",
                self.working_dir.path().display(),
                path.display()
            )
        })?;

        warn!("kept the files of the failed build in `{}`", path.display());

        Ok(())
    }

    /// Compiles the document and returns the pdf.
    ///
    /// The working directory is removed afterwards, unless compiling failed
    /// and a directory to preserve it in has been set.
    pub fn render(self) -> anyhow::Result<Vec<u8>> {
        let mut cmd = self.command();
        debug!("running {:?}", cmd);

        let output = cmd.output().map_err(|source| RenderingError::RunError {
            latex_mk_path: self.latex_mk_path.clone(),
            source,
        })?;

        if !output.status.success() {
            if let Some(path) = &self.preserve_dir {
                self.preserve(path)?;
            }

            return Err(RenderingError::failed(&output).into());
        }

        Ok(utils::read(self.working_dir.path().join(OUTPUT_FILE))
            .map_err(RenderingError::ReadOutputFile)?)
    }
}
