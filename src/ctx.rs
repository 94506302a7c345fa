use std::path::{Path, PathBuf};

use crate::explain::Narrative;
use crate::extract::{GeneFallback, VariantRecord};
use crate::schema::v1::PgxReportV1;
use crate::scores::DrugOutcome;
use crate::tables::ReferenceTables;

pub const DEFAULT_MAX_INPUT_BYTES: u64 = 5 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Vcf,
    VcfGz,
}

impl InputFormat {
    pub fn detect(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        if name.ends_with(".vcf.gz") {
            Some(Self::VcfGz)
        } else if name.ends_with(".vcf") {
            Some(Self::Vcf)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub input: PathBuf,
    pub input_format: Option<InputFormat>,
    pub drugs: Vec<String>,
    pub tables_path: Option<PathBuf>,
    pub gene_fallback: GeneFallback,
    pub seed: Option<u64>,
    pub max_input_bytes: u64,
    pub write_json: bool,
    pub write_tsv: bool,
    pub report_id: String,
    pub timestamp: String,
    pub input_bytes: u64,
    pub raw_text: String,
    pub records: Vec<VariantRecord>,
    pub tables: Option<ReferenceTables>,
    pub outcomes: Vec<DrugOutcome>,
    pub narratives: Vec<Narrative>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub report: PgxReportV1,
}

impl Ctx {
    pub fn new(
        input: PathBuf,
        out_dir: PathBuf,
        drugs: Vec<String>,
        tables_path: Option<PathBuf>,
        write_json: bool,
        write_tsv: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("pgx_report.json");
        let tsv_path = out_dir.join("pgx_report.tsv");
        let report_id = new_report_id();
        let timestamp = chrono::Utc::now().to_rfc3339();
        let report = PgxReportV1::empty(tool_version, &report_id, &timestamp);
        Self {
            input_format: InputFormat::detect(&input),
            input,
            drugs,
            tables_path,
            gene_fallback: GeneFallback::default(),
            seed: None,
            max_input_bytes: DEFAULT_MAX_INPUT_BYTES,
            write_json,
            write_tsv,
            report_id,
            timestamp,
            input_bytes: 0,
            raw_text: String::new(),
            records: Vec::new(),
            tables: None,
            outcomes: Vec::new(),
            narratives: Vec::new(),
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                json_path,
                tsv_path,
            },
            report,
        }
    }

    pub fn set_report_id(&mut self, report_id: &str) {
        self.report_id = report_id.to_string();
        self.report.report_id = report_id.to_string();
    }

    pub fn tables(&self) -> anyhow::Result<&ReferenceTables> {
        self.tables
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("reference tables not loaded"))
    }
}

pub fn new_report_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..8].to_string()
}
