//! The flat outline format.
//!
//! The outline is the tree written one entry per line, with no indentation:
//!
//! ```text
//! >a            enter directory "a"
//! b.html        file in the current directory
//! index.html
//! <             leave the current directory
//! c.png         file back in the root
//! ```
//!
//! Within a directory, subdirectories come first (each fully expanded), then
//! the directory's own files. The format is restorable: [`Outline::to_tree`]
//! rebuilds the tree it was written from, with two limits:
//!
//! - A file named exactly `<`, or any file whose name starts with `>`, reads
//!   back as a marker. Names are written as-is, so such files do not survive
//!   a round trip.
//! - The empty text is an empty outline. A tree whose only entry is a root
//!   file with an empty name (from the path `"all/"`) writes that same empty
//!   text and reads back as an empty tree.

use crate::tree::{Directory, PathTree};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum OutlineError {
    #[error("line {0}: '<' with no open directory")]
    UnmatchedExit(usize),
    #[error("{0} directory(ies) never closed")]
    Unclosed(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutlineLine {
    Enter(String),
    Exit,
    File(String),
}

impl fmt::Display for OutlineLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutlineLine::Enter(name) => write!(f, ">{name}"),
            OutlineLine::Exit => f.write_str("<"),
            OutlineLine::File(name) => f.write_str(name),
        }
    }
}

impl OutlineLine {
    fn parse(line: &str) -> Self {
        if let Some(name) = line.strip_prefix('>') {
            OutlineLine::Enter(name.to_string())
        } else if line == "<" {
            OutlineLine::Exit
        } else {
            OutlineLine::File(line.to_string())
        }
    }
}

/// A whole outline, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    pub lines: Vec<OutlineLine>,
}

impl Outline {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Read an outline back from its text form.
    ///
    /// Any line that is not `>name` or exactly `<` is a file name. An empty
    /// input is an empty outline, never a single empty-named file.
    pub fn parse(text: &str) -> Result<Self, OutlineError> {
        if text.is_empty() {
            return Ok(Self::default());
        }
        let lines: Vec<OutlineLine> = text.split('\n').map(OutlineLine::parse).collect();

        let mut depth = 0usize;
        for (i, line) in lines.iter().enumerate() {
            match line {
                OutlineLine::Enter(_) => depth += 1,
                OutlineLine::Exit => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or(OutlineError::UnmatchedExit(i + 1))?;
                }
                OutlineLine::File(_) => {}
            }
        }
        if depth > 0 {
            return Err(OutlineError::Unclosed(depth));
        }
        Ok(Self { lines })
    }

    /// Rebuild the tree this outline describes.
    pub fn to_tree(&self) -> Result<PathTree, OutlineError> {
        let mut tree = PathTree::new();
        let mut stack: Vec<String> = Vec::new();
        for (i, line) in self.lines.iter().enumerate() {
            match line {
                OutlineLine::Enter(name) => {
                    stack.push(name.clone());
                    // Empty directories still exist in the tree.
                    descend(&mut tree.root, &stack);
                }
                OutlineLine::Exit => {
                    stack.pop().ok_or(OutlineError::UnmatchedExit(i + 1))?;
                }
                OutlineLine::File(name) => descend(&mut tree.root, &stack).push_file(name),
            }
        }
        if !stack.is_empty() {
            return Err(OutlineError::Unclosed(stack.len()));
        }
        Ok(tree)
    }
}

fn descend<'a>(root: &'a mut Directory, path: &[String]) -> &'a mut Directory {
    path.iter().fold(root, |dir, name| dir.dir_mut(name))
}

impl fmt::Display for Outline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}
