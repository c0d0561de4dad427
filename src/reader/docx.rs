//! DOCX 读取 - 基础设施层
//!
//! DOCX 是包含 XML 部件的 zip 压缩包。本模块解开压缩包，
//! 流式解析 word/document.xml，按顺序收集每个 w:p 段落的文本，
//! 再以双换行拼接成单个全文字符串交给上层。

use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use std::path::Path;
use thiserror::Error;
use zip::ZipArchive;

/// DOCX 读取错误（对单个文档而言是致命的）
#[derive(Debug, Error)]
pub enum DocxError {
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("DOCX 压缩包无法打开: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("DOCX 中缺少 word/document.xml: {0}")]
    MissingDocumentXml(zip::result::ZipError),
    #[error("document.xml 解析失败 (位置 {position}): {message}")]
    Xml { position: u64, message: String },
}

/// DOCX 读取器
pub struct DocxReader;

impl DocxReader {
    /// 读取整份文档，所有段落以双换行拼接成单个全文字符串
    pub async fn read_to_string(path: &Path) -> Result<String, DocxError> {
        let paragraphs = Self::read_paragraphs(path).await?;
        Ok(paragraphs.join("\n\n"))
    }

    /// 读取文档的段落文本列表
    ///
    /// 逐段修剪首尾空白；空段落保留，维持原始段落顺序。
    pub async fn read_paragraphs(path: &Path) -> Result<Vec<String>, DocxError> {
        let bytes = tokio::fs::read(path).await?;
        let xml = Self::document_xml(bytes)?;
        Self::parse_paragraphs(&xml)
    }

    /// 从压缩包中取出主文档部件
    fn document_xml(bytes: Vec<u8>) -> Result<String, DocxError> {
        let mut archive = ZipArchive::new(Cursor::new(bytes))?;
        let mut part = archive
            .by_name("word/document.xml")
            .map_err(DocxError::MissingDocumentXml)?;
        let mut xml = String::new();
        part.read_to_string(&mut xml)?;
        Ok(xml)
    }

    /// 解析 document.xml，提取每个 w:p 段落的文本
    ///
    /// 只修剪段落整体的首尾空白，不修剪单个文本运行，
    /// 否则 "A) " + "Blue" 这类跨运行的文本会被拼成 "A)Blue"。
    fn parse_paragraphs(xml: &str) -> Result<Vec<String>, DocxError> {
        let mut reader = Reader::from_str(xml);
        let mut paragraphs = Vec::new();
        let mut current = String::new();
        let mut in_paragraph = false;
        let mut in_text = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"w:p" => {
                        in_paragraph = true;
                        current.clear();
                    }
                    b"w:t" => in_text = true,
                    _ => {}
                },
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"w:p" => {
                        in_paragraph = false;
                        paragraphs.push(current.trim().to_string());
                    }
                    b"w:t" => in_text = false,
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    // 空段落也保留，维持段落顺序
                    b"w:p" => paragraphs.push(String::new()),
                    b"w:tab" if in_paragraph => current.push('\t'),
                    b"w:br" | b"w:cr" if in_paragraph => current.push('\n'),
                    _ => {}
                },
                Ok(Event::Text(e)) => {
                    if in_paragraph && in_text {
                        let text = e.unescape().map_err(|err| DocxError::Xml {
                            position: reader.buffer_position(),
                            message: err.to_string(),
                        })?;
                        current.push_str(&text);
                    }
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(err) => {
                    return Err(DocxError::Xml {
                        position: reader.buffer_position(),
                        message: err.to_string(),
                    })
                }
            }
        }

        Ok(paragraphs)
    }
}
