/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 待处理的 DOCX 文件，或存放 DOCX 文件的目录
    pub docx_path: String,
    /// 结构化结果导出目录
    pub export_dir: String,
    /// 导出格式（json / toml）
    pub export_format: String,
    /// 可读报告输出文件
    pub report_file: String,
    /// 同时处理的文件数量
    pub max_concurrent_files: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docx_path: "input_docx".to_string(),
            export_dir: "output_quiz".to_string(),
            export_format: "json".to_string(),
            report_file: "report.txt".to_string(),
            max_concurrent_files: 4,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            docx_path: std::env::var("DOCX_PATH").unwrap_or(default.docx_path),
            export_dir: std::env::var("EXPORT_DIR").unwrap_or(default.export_dir),
            export_format: std::env::var("EXPORT_FORMAT").unwrap_or(default.export_format),
            report_file: std::env::var("REPORT_FILE").unwrap_or(default.report_file),
            max_concurrent_files: std::env::var("MAX_CONCURRENT_FILES").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrent_files),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
