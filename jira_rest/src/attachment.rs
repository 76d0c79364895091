//! Keeping named attachments on an issue in sync with local files.
//!
//! Attachments are identified by file name, compared case-insensitively and without any
//! directory part. Should an issue carry several attachments with the same name, the first
//! one in the order Jira lists them is the one operated on.
//!
//! Jira has no way of replacing the content of an attachment, so
//! [`update_attachment`](Jira::update_attachment) deletes the old one and uploads the file
//! again. If the upload fails after the delete succeeded, the issue is left without the
//! attachment; callers that care should retry the update.
use std::{
    fs::File,
    path::{Path, PathBuf},
};

use log::{debug, info};
use reqwest::{Method, StatusCode};
use tempfile::NamedTempFile;

use crate::{
    models::attachment::Attachment, Jira, JiraError, Payload, Request, Result, Transport,
};

impl<T: Transport> Jira<T> {
    /// The first attachment of the issue whose name matches the file name of `filename`
    ///
    /// # Errors
    /// [`JiraError::IssueNotFound`] if there is no such issue
    pub fn lookup_attachment(&self, issue_key: &str, filename: &str) -> Result<Option<Attachment>> {
        let wanted = base_name(Path::new(filename))?;
        let issue = self.get_issue(issue_key)?;
        Ok(issue
            .fields
            .attachment
            .into_iter()
            .find(|attachment| attachment.has_filename(&wanted)))
    }

    /// Id of the attachment named like `filename`
    ///
    /// # Errors
    /// [`JiraError::AttachmentNotFound`] if the issue has no such attachment,
    /// [`JiraError::IssueNotFound`] if there is no such issue
    pub fn find_attachment(&self, issue_key: &str, filename: &str) -> Result<String> {
        self.lookup_attachment(issue_key, filename)?
            .map(|attachment| attachment.id)
            .ok_or_else(|| JiraError::AttachmentNotFound {
                issue: issue_key.to_string(),
                filename: filename.to_string(),
            })
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn has_attachment(&self, issue_key: &str, filename: &str) -> Result<bool> {
        match self.find_attachment(issue_key, filename) {
            Ok(_) => Ok(true),
            Err(JiraError::AttachmentNotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Uploads the file at `path` to the issue, refusing to shadow an existing attachment
    /// of the same name.
    ///
    /// # Errors
    /// [`JiraError::AlreadyExists`] if the issue already has an attachment with that name,
    /// [`JiraError::UploadFailed`] if Jira answers anything but 200,
    /// [`JiraError::Io`] if the file can not be opened
    pub fn add_attachment(&self, issue_key: &str, path: impl AsRef<Path>) -> Result<()> {
        let (file_name, file) = open_upload(path.as_ref())?;
        self.add_opened(issue_key, file_name, file)
    }

    /// Replaces the attachment named like the file at `path`, or adds it if there is none.
    ///
    /// # Errors
    /// [`JiraError::DeleteFailed`] if the old attachment could not be removed, in which case
    /// nothing is uploaded, otherwise as [`add_attachment`](Jira::add_attachment)
    pub fn update_attachment(&self, issue_key: &str, path: impl AsRef<Path>) -> Result<()> {
        // Opened up front, a missing local file must not cost us the remote one
        let (file_name, file) = open_upload(path.as_ref())?;

        if let Some(existing) = self.lookup_attachment(issue_key, &file_name)? {
            info!(
                "Replacing attachment '{}' (id={}) on {}",
                existing.filename, existing.id, issue_key
            );
            let status = self.delete_attachment(&existing.id)?;
            if status != StatusCode::NO_CONTENT {
                return Err(JiraError::DeleteFailed {
                    id: existing.id,
                    status,
                });
            }
        }

        self.add_opened(issue_key, file_name, file)
    }

    /// Deletes an attachment, true if Jira confirmed it with 204
    #[allow(clippy::missing_errors_doc)]
    pub fn remove_attachment(&self, attachment_id: &str) -> Result<bool> {
        Ok(self.delete_attachment(attachment_id)? == StatusCode::NO_CONTENT)
    }

    /// Downloads an attachment into the current directory, see
    /// [`download_attachment_to`](Jira::download_attachment_to)
    #[allow(clippy::missing_errors_doc)]
    pub fn download_attachment(&self, issue_id: &str, filename: &str) -> Result<PathBuf> {
        let dir = std::env::current_dir()?;
        self.download_attachment_to(issue_id, filename, dir)
    }

    /// Downloads the attachment named like `filename` into `dir`, replacing any local file of
    /// that name, and returns the path of the local file.
    ///
    /// The content goes to a temporary file first, which only replaces the target once the
    /// transfer is complete.
    ///
    /// # Errors
    /// [`JiraError::AttachmentNotFound`] if the issue has no such attachment
    pub fn download_attachment_to(
        &self,
        issue_id: &str,
        filename: &str,
        dir: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let dir = dir.as_ref();
        let file_name = base_name(Path::new(filename))?;
        let attachment = self
            .lookup_attachment(issue_id, &file_name)?
            .ok_or_else(|| JiraError::AttachmentNotFound {
                issue: issue_id.to_string(),
                filename: filename.to_string(),
            })?;

        if attachment.content.is_empty() {
            return Err(JiraError::InvalidArgument(format!(
                "attachment {} of {issue_id} has no content url",
                attachment.id
            )));
        }
        // `join` leaves absolute content urls untouched
        let url = self.host().join(&attachment.content)?;
        let target = dir.join(&file_name);
        info!("Downloading {} to {}", url, target.display());

        let mut partial = NamedTempFile::new_in(dir)?;
        let (status, written) = self.transport().download(&url, partial.as_file_mut())?;
        if !status.is_success() {
            return Err(JiraError::from_status(status, &[], url.as_str()));
        }
        partial.persist(&target).map_err(|e| e.error)?;
        debug!("{} bytes written to {}", written, target.display());

        Ok(target)
    }

    fn add_opened(&self, issue_key: &str, file_name: String, file: File) -> Result<()> {
        if self.has_attachment(issue_key, &file_name)? {
            return Err(JiraError::AlreadyExists {
                issue: issue_key.to_string(),
                filename: file_name,
            });
        }

        info!("Uploading '{}' to {}", file_name, issue_key);
        let url = self.api_url(&format!("/issue/{issue_key}/attachments"))?;
        let request =
            Request::new(Method::POST, url).with_payload(Payload::File { file_name, file });
        let status = self.send(request)?.status;
        if status != StatusCode::OK {
            return Err(JiraError::UploadFailed { status });
        }
        Ok(())
    }

    fn delete_attachment(&self, attachment_id: &str) -> Result<StatusCode> {
        let status = self.delete(&format!("/attachment/{attachment_id}"))?;
        debug!("Deleting attachment {} answered {}", attachment_id, status);
        Ok(status)
    }
}

/// File name part of `path`, the name an attachment is known by
fn base_name(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| {
            JiraError::InvalidArgument(format!("'{}' does not name a file", path.display()))
        })
}

fn open_upload(path: &Path) -> Result<(String, File)> {
    let file_name = base_name(path)?;
    let file = File::open(path)?;
    Ok((file_name, file))
}
