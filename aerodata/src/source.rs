// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Line sources for the text formats.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor, Read};
use std::path::Path;

use arinc424::RECORD_LENGTH;
use log::{info, warn};

use crate::{ArchiveMember, Error};

/// Returns `true` if the path has a `.zip` extension.
pub fn is_zip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

/// The lines of a plain file or of an archive member, without line endings.
///
/// A zip member is read into memory and the archive is closed before the
/// first line is returned. An archive without a matching member has no lines.
pub struct Lines {
    reader: Box<dyn BufRead>,
    buf: Vec<u8>,
}

impl Lines {
    /// Opens the file at `path`, or the `member` of it if it is a zip archive.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be opened or the archive is corrupt.
    pub fn open(path: &Path, member: &ArchiveMember) -> Result<Self, Error> {
        let file = File::open(path)?;

        let reader: Box<dyn BufRead> = if is_zip(path) {
            let mut archive = zip::ZipArchive::new(file)?;
            let name = member
                .select(archive.file_names())
                .map(str::to_string);

            match name {
                Some(name) => {
                    info!("reading {name} from {}", path.display());
                    let mut data = Vec::new();
                    archive.by_name(&name)?.read_to_end(&mut data)?;
                    Box::new(Cursor::new(data))
                }
                None => {
                    warn!(
                        "{} has no member with extension {}",
                        path.display(),
                        member.extension
                    );
                    Box::new(Cursor::new(Vec::new()))
                }
            }
        } else {
            info!("reading {}", path.display());
            Box::new(BufReader::new(file))
        };

        Ok(Self {
            reader,
            buf: Vec::new(),
        })
    }

    /// Converts the lines into ARINC 424 records.
    ///
    /// Non-ASCII bytes are dropped, blank lines are skipped and each record is
    /// padded or cut to the record length.
    pub fn records(self) -> impl Iterator<Item = Result<Vec<u8>, Error>> {
        self.filter_map(|line| match line {
            Ok(mut line) => {
                line.retain(u8::is_ascii);
                if line.iter().all(u8::is_ascii_whitespace) {
                    return None;
                }
                line.resize(RECORD_LENGTH, b' ');
                Some(Ok(line))
            }
            Err(e) => Some(Err(e)),
        })
    }

    /// Converts the lines to text, replacing invalid UTF-8.
    pub fn text(self) -> impl Iterator<Item = Result<String, Error>> {
        self.map(|line| line.map(|l| String::from_utf8_lossy(&l).into_owned()))
    }
}

impl Iterator for Lines {
    type Item = Result<Vec<u8>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                let mut line = std::mem::take(&mut self.buf);
                if line.last() == Some(&b'\n') {
                    line.pop();
                }
                if line.last() == Some(&b'\r') {
                    line.pop();
                }
                Some(Ok(line))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}
