use docx_quiz_extract::logger;
use docx_quiz_extract::orchestrator::process_document;
use docx_quiz_extract::{AnswerLetter, App, AppError, Config, DocxReader, ExtractionFlow};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 测试用的天空颜色文档，段落顺序与真实试卷一致
const SKY_PARAGRAPHS: &[&str] = &[
    "Type: Multiple choice question",
    "Question 1 What color is the sky?",
    "A) Blue",
    "B) Red",
    "C) Green",
    "D) Yellow",
    "Answer key",
    "1.a",
];

/// 把段落列表包装成最小可用的 document.xml
fn docx_xml(paragraphs: &[&str]) -> String {
    let mut body = String::new();
    for text in paragraphs {
        body.push_str("<w:p><w:r><w:t xml:space=\"preserve\">");
        body.push_str(&quick_xml::escape::escape(*text));
        body.push_str("</w:t></w:r></w:p>");
    }
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
         <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:body>{}</w:body></w:document>",
        body
    )
}

/// 生成一个只含 word/document.xml 的测试 DOCX
fn build_docx(path: &Path, paragraphs: &[&str]) {
    let file = std::fs::File::create(path).expect("创建测试 DOCX 失败");
    let mut writer = zip::ZipWriter::new(file);
    writer
        .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .expect("写入 document.xml 失败");
    writer
        .write_all(docx_xml(paragraphs).as_bytes())
        .expect("写入 XML 内容失败");
    writer.finish().expect("关闭压缩包失败");
}

/// 每个测试用独立的临时目录，避免并行测试互相干扰
fn test_workspace(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("docx_quiz_extract_{}", name));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("创建测试目录失败");
    dir
}

#[tokio::test]
async fn test_reader_preserves_paragraph_order() {
    logger::init();

    let dir = test_workspace("reader");
    let docx = dir.join("paragraphs.docx");
    build_docx(&docx, &["第一段", "  第二段带空白  ", "第三段"]);

    let paragraphs = DocxReader::read_paragraphs(&docx)
        .await
        .expect("读取段落失败");
    assert_eq!(paragraphs, vec!["第一段", "第二段带空白", "第三段"]);

    let blob = DocxReader::read_to_string(&docx).await.expect("读取全文失败");
    assert_eq!(blob, "第一段\n\n第二段带空白\n\n第三段");

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_extract_sky_document_end_to_end() {
    logger::init();

    let dir = test_workspace("sky");
    let docx = dir.join("sky.docx");
    build_docx(&docx, SKY_PARAGRAPHS);

    let blob = DocxReader::read_to_string(&docx).await.expect("读取全文失败");
    let flow = ExtractionFlow::new().expect("创建提取流程失败");
    let items = flow.run(&blob);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].number, 1);
    assert_eq!(items[0].question_text, "What color is the sky?");
    // 选项保留原始行内容，带着自己的前缀
    assert_eq!(
        items[0].options,
        vec!["A) Blue", "B) Red", "C) Green", "D) Yellow"]
    );
    assert_eq!(items[0].answer, Some(AnswerLetter::A));

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_extract_without_answer_key_degrades() {
    logger::init();

    let dir = test_workspace("no_key");
    let docx = dir.join("no_key.docx");
    // 去掉答案区的两个段落
    build_docx(&docx, &SKY_PARAGRAPHS[..6]);

    let blob = DocxReader::read_to_string(&docx).await.expect("读取全文失败");
    let items = ExtractionFlow::new().expect("创建提取流程失败").run(&blob);

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].question_text, "What color is the sky?");
    assert_eq!(items[0].answer, None);

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_process_document_writes_report_and_export() {
    logger::init();

    let dir = test_workspace("process");
    let docx = dir.join("样卷.docx");
    build_docx(&docx, SKY_PARAGRAPHS);

    let config = Config {
        docx_path: docx.display().to_string(),
        export_dir: dir.join("out").display().to_string(),
        export_format: "json".to_string(),
        report_file: dir.join("report.txt").display().to_string(),
        max_concurrent_files: 1,
        verbose_logging: true,
    };

    let stats = process_document(&docx, 1, &config)
        .await
        .expect("处理文档失败");
    assert_eq!(stats.questions, 1);
    assert_eq!(stats.answered, 1);

    // 报告文件：追加了渲染好的报告
    let report = std::fs::read_to_string(dir.join("report.txt")).expect("读取报告失败");
    assert!(report.contains("Source: 样卷"));
    assert!(report.contains("Q1. What color is the sky?"));
    assert!(report.contains("  A. Blue"));
    assert!(report.contains("Answer - a (Option A)"));

    // 导出文件：与源文档同名的 JSON
    let export = std::fs::read_to_string(dir.join("out").join("样卷.json")).expect("读取导出失败");
    let value: serde_json::Value = serde_json::from_str(&export).expect("JSON 解析失败");
    assert_eq!(value["items"][0]["number"], 1);
    assert_eq!(value["items"][0]["answer_letter"], "a");

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_process_document_fails_on_missing_file() {
    logger::init();

    let dir = test_workspace("missing");
    let config = Config {
        docx_path: dir.display().to_string(),
        export_dir: dir.join("out").display().to_string(),
        report_file: dir.join("report.txt").display().to_string(),
        ..Config::default()
    };

    let err = process_document(&dir.join("不存在.docx"), 1, &config)
        .await
        .expect_err("缺失文件应当报错");
    assert!(matches!(err, AppError::Docx(_)));

    // 致命错误：不产生任何导出文件
    assert!(!dir.join("out").exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn test_app_processes_folder_in_batches() {
    logger::init();

    let dir = test_workspace("folder");
    build_docx(&dir.join("b_second.docx"), SKY_PARAGRAPHS);
    build_docx(&dir.join("a_first.docx"), &["这份文档没有任何题块"]);
    // 非 docx 文件应当被忽略
    std::fs::write(dir.join("notes.txt"), "无关文件").expect("写入无关文件失败");

    let config = Config {
        docx_path: dir.display().to_string(),
        export_dir: dir.join("out").display().to_string(),
        export_format: "json".to_string(),
        report_file: dir.join("report.txt").display().to_string(),
        max_concurrent_files: 2,
        verbose_logging: false,
    };

    let app = App::initialize(config).expect("初始化应用失败");
    app.run().await.expect("运行应用失败");

    // 两份文档都有导出，无关文件没有
    let first: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.join("out").join("a_first.json")).expect("读取导出失败"),
    )
    .expect("JSON 解析失败");
    assert_eq!(first["items"].as_array().map(|a| a.len()), Some(0));

    let second: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.join("out").join("b_second.json")).expect("读取导出失败"),
    )
    .expect("JSON 解析失败");
    assert_eq!(second["items"][0]["answer_letter"], "a");
    assert!(!dir.join("out").join("notes.json").exists());

    // 报告文件以带时间戳的文件头开始，两份文档各有一段报告
    let report = std::fs::read_to_string(dir.join("report.txt")).expect("读取报告失败");
    assert!(report.contains("测验提取报告"));
    assert!(report.contains("Source: a_first"));
    assert!(report.contains("Source: b_second"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
#[ignore] // 默认忽略，需要手动运行：cargo test -- --ignored
async fn test_process_configured_folder() {
    // 初始化日志
    logger::init();

    // 加载配置（DOCX_PATH 等环境变量指向真实文档）
    let config = Config::from_env();

    // 初始化并运行应用
    let app = App::initialize(config).expect("初始化应用失败");
    app.run().await.expect("运行应用失败");
}
