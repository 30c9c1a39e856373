use std::path::PathBuf;

use log::{debug, info};

use crate::input::Config;
use crate::latex_string::LatexString;
use crate::sheet::{Row, TimeSheet};
use crate::tex_render::TexRender;
use crate::time::TimeStamp;
use crate::utils::{self, Resources};

const TEMPLATE: &str = "template.tex";
const LOGO: &str = "logo.png";

const SHADED: &str = "\\cellcolor{lightgray!50}";

/// One line of the table, the empty cell is the break.
#[must_use]
fn table_line(
    day: &str,
    start: &str,
    end: &str,
    duration: &str,
    recorded_on: &str,
    remarks: &str,
) -> String {
    format!(
        "{}&{}&&{}&{}&{}&{}\\\\\\hline\n",
        day, start, end, duration, recorded_on, remarks
    )
}

#[must_use]
fn row_line(row: &Row) -> String {
    let time = |value: Option<TimeStamp>| value.map(|time| time.to_string()).unwrap_or_default();

    let day = if row.is_shaded() {
        format!("{}{}", SHADED, row.label())
    } else {
        row.label().to_string()
    };

    table_line(
        &day,
        &time(row.start()),
        &time(row.end()),
        &row.duration().map(|d| d.to_string()).unwrap_or_default(),
        row.recorded_on().unwrap_or_default(),
        &row
            .remarks()
            .map(|remarks| LatexString::new(remarks).to_string())
            .unwrap_or_default(),
    )
}

pub struct LatexGenerator<'a> {
    config: &'a Config,
    sheet: &'a TimeSheet,
}

impl<'a> LatexGenerator<'a> {
    pub fn new(config: &'a Config, sheet: &'a TimeSheet) -> Self {
        Self { config, sheet }
    }

    /// Fills the template with the content of the time sheet.
    pub fn to_tex(&self) -> anyhow::Result<String> {
        let template = Resources::require(TEMPLATE)?;
        let template = std::str::from_utf8(template.data.as_ref())?;

        let mut rows = self
            .sheet
            .rows()
            .iter()
            .map(row_line)
            .collect::<String>();

        rows.push_str(&table_line(
            "\\multicolumn{1}{|l|}{\\textbf{Summe}}",
            "",
            "",
            &self.sheet.total().to_string(),
            "",
            "",
        ));

        debug!("filling template with {} rows", self.sheet.rows().len());

        Ok(template
            .replace("{{name}}", self.sheet.name())
            .replace("{{unit}}", self.sheet.unit_of_organisation())
            .replace("{{period}}", self.sheet.period())
            .replace("{{total}}", &self.sheet.expected().to_string())
            .replace("{{rows}}", &rows))
    }

    /// Writes the latex file or the compiled pdf, returns the paths of the
    /// written files.
    ///
    /// The latex file needs the logo next to it, so it is written as well.
    pub fn generate(self) -> anyhow::Result<Vec<PathBuf>> {
        let tex = self.to_tex()?;

        if let Some(parent) = self.config.output().parent() {
            if !parent.as_os_str().is_empty() {
                utils::create_dir_all(parent)?;
            }
        }

        if self.config.tex_only() {
            let path = self.config.output_with_extension("tex");
            utils::write(&path, tex)?;

            let logo = self.config.output().with_file_name(LOGO);
            utils::write(&logo, Resources::require(LOGO)?.data.as_ref())?;

            return Ok(vec![path, logo]);
        }

        info!("Compiling latex file to pdf");

        let mut renderer = TexRender::from_bytes(tex.into_bytes())?;
        renderer.add_asset_from_bytes(LOGO, Resources::require(LOGO)?.data.as_ref())?;

        if let Some(path) = self.config.latex_mk_path() {
            renderer.latex_mk_path(path);
        }

        if let Some(dir) = self.config.preserve_dir() {
            renderer.preserve_dir(dir);
        }

        let path = self.config.output_with_extension("pdf");
        utils::write(&path, renderer.render()?)?;

        info!("Done");

        Ok(vec![path])
    }
}
