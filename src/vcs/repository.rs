use std::path::{Path, PathBuf};

use git2::{Cred, CredentialType, ErrorCode, PushOptions, RemoteCallbacks, Repository};

use crate::error::{Result, VerbumpError};
use crate::vcs::VersionControl;

fn git_error(msg: impl AsRef<str>) -> VerbumpError {
    VerbumpError::Git(git2::Error::from_str(msg.as_ref()))
}

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Repository,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Repository) -> Self {
        Git2Repository { repo }
    }

    /// Index paths are relative to the working directory.
    fn workdir_relative(&self, path: &Path) -> Result<PathBuf> {
        let workdir = self
            .repo
            .workdir()
            .ok_or_else(|| git_error("bare repository has no working directory"))?
            .canonicalize()?;
        let absolute = path.canonicalize()?;

        absolute
            .strip_prefix(&workdir)
            .map(Path::to_path_buf)
            .map_err(|_| {
                git_error(format!(
                    "'{}' is outside the repository at '{}'",
                    path.display(),
                    workdir.display()
                ))
            })
    }

    fn current_branch(&self) -> Result<String> {
        let head = self.repo.head()?;
        if !head.is_branch() {
            return Err(git_error("HEAD is detached; nothing to push"));
        }
        head.shorthand()
            .map(str::to_string)
            .ok_or_else(|| git_error("branch name is not valid UTF-8"))
    }

    fn push_refspec(&self, remote_name: &str, refspec: &str) -> Result<()> {
        let mut remote = self
            .repo
            .find_remote(remote_name)
            .map_err(|_| git_error(format!("No remote named '{}' found", remote_name)))?;

        let mut push_options = PushOptions::new();
        push_options.remote_callbacks(remote_callbacks());

        remote.push(&[refspec], Some(&mut push_options)).map_err(|e| {
            if e.class() == git2::ErrorClass::Net {
                git_error(format!("Network error during push: {}", e))
            } else {
                VerbumpError::Git(e)
            }
        })
    }
}

/// Credentials from the SSH agent, then the usual key files, then git's defaults.
fn remote_callbacks<'a>() -> RemoteCallbacks<'a> {
    let mut callbacks = RemoteCallbacks::new();

    callbacks.credentials(|_url, username_from_url, allowed_types| {
        let username = username_from_url.unwrap_or("git");

        if allowed_types.contains(CredentialType::SSH_KEY) {
            if let Ok(cred) = Cred::ssh_key_from_agent(username) {
                return Ok(cred);
            }
            if let Some(home) = dirs::home_dir() {
                for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                    let path = home.join(".ssh").join(key);
                    if path.exists() {
                        if let Ok(cred) = Cred::ssh_key(username, None, &path, None) {
                            return Ok(cred);
                        }
                    }
                }
            }
        }

        Cred::default()
    });

    callbacks.push_update_reference(|refname, status| match status {
        Some(status) => Err(git2::Error::from_str(&format!(
            "remote rejected {}: {}",
            refname, status
        ))),
        None => Ok(()),
    });

    callbacks
}

impl VersionControl for Git2Repository {
    fn stage(&self, paths: &[PathBuf]) -> Result<()> {
        let mut index = self.repo.index()?;
        for path in paths {
            index.add_path(&self.workdir_relative(path)?)?;
        }
        index.write()?;
        Ok(())
    }

    fn commit(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.repo.signature()?;

        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit()?),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                None
            }
            Err(e) => return Err(e.into()),
        };
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;
        Ok(())
    }

    fn push(&self, remote: &str) -> Result<()> {
        let branch = self.current_branch()?;
        self.push_refspec(remote, &format!("refs/heads/{0}:refs/heads/{0}", branch))
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .map_err(|e| git_error(format!("Cannot create tag '{}': {}", name, e)))?;
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        self.push_refspec(remote, &format!("refs/tags/{0}:refs/tags/{0}", name))
    }
}
