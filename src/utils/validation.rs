// file: src/utils/validation.rs
// description: input validation for backend urls, pdf paths and questions
// reference: input validation patterns

use crate::error::{ClientError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_url(url: &str) -> Result<()> {
        let url = url.trim();
        let rest = url
            .strip_prefix("http://")
            .or_else(|| url.strip_prefix("https://"));

        match rest {
            Some(host) if !host.trim_matches('/').is_empty() => Ok(()),
            _ => Err(ClientError::Validation(format!(
                "Invalid URL format: {}",
                url
            ))),
        }
    }

    pub fn validate_pdf_path(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(ClientError::Validation(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(ClientError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        Self::validate_pdf_extension(path)
    }

    pub fn validate_pdf_extension(path: &Path) -> Result<()> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => Ok(()),
            _ => Err(ClientError::Validation(format!(
                "File is not a PDF: {}",
                path.display()
            ))),
        }
    }

    pub fn validate_question(question: &str) -> Result<()> {
        if question.trim().is_empty() {
            return Err(ClientError::Validation("Question is empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_url() {
        assert!(Validator::validate_url("http://backend:3001").is_ok());
        assert!(Validator::validate_url("https://qa.example.com/").is_ok());
        assert!(Validator::validate_url("backend:3001").is_err());
        assert!(Validator::validate_url("http://").is_err());
    }

    #[test]
    fn test_validate_pdf_path() {
        let temp_dir = TempDir::new().unwrap();
        let pdf = temp_dir.path().join("report.PDF");
        let txt = temp_dir.path().join("notes.txt");
        fs::write(&pdf, b"%PDF-1.4").unwrap();
        fs::write(&txt, b"hello").unwrap();

        assert!(Validator::validate_pdf_path(&pdf).is_ok());
        assert!(Validator::validate_pdf_path(&txt).is_err());
        assert!(Validator::validate_pdf_path(temp_dir.path()).is_err());
        assert!(Validator::validate_pdf_path(&temp_dir.path().join("missing.pdf")).is_err());
    }

    #[test]
    fn test_validate_question() {
        assert!(Validator::validate_question("What is X?").is_ok());
        assert!(Validator::validate_question(" \n\t ").is_err());
    }
}
