use anyhow::{bail, Result};
use jira_rest::Jira;

use crate::cli::AttachmentCommand;

pub(crate) fn execute(jira: &Jira, cmd: AttachmentCommand) -> Result<()> {
    match cmd {
        AttachmentCommand::Find { issue, filename } => {
            println!("{}", jira.find_attachment(&issue, &filename)?);
        }
        AttachmentCommand::Add { issue, path } => {
            jira.add_attachment(&issue, &path)?;
            println!("Attached {} to {issue}", path.display());
        }
        AttachmentCommand::Update { issue, path } => {
            jira.update_attachment(&issue, &path)?;
            println!("Attachment {} of {issue} is up to date", path.display());
        }
        AttachmentCommand::Remove { attachment_id } => {
            if !jira.remove_attachment(&attachment_id)? {
                bail!("Jira did not confirm the removal of attachment {attachment_id}");
            }
            println!("Attachment {attachment_id} removed");
        }
        AttachmentCommand::Download { issue, filename, dir } => {
            let path = match dir {
                Some(dir) => jira.download_attachment_to(&issue, &filename, dir)?,
                None => jira.download_attachment(&issue, &filename)?,
            };
            println!("{}", path.display());
        }
    }
    Ok(())
}
