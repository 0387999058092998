//! Colon-delimited system databases (`/etc/passwd`, `/etc/group`)
//!
//! Both files share the `name:password:id:...` layout, so one parser serves
//! users and groups alike.

use std::path::Path;

use tracing::debug;

use crate::candidate::{Candidate, Completion};
use crate::os_context::OsContext;

pub const PASSWD_PATH: &str = "/etc/passwd";
pub const GROUP_PATH: &str = "/etc/group";

/// Parse database content into `(name, id)` candidates in file order.
///
/// A record needs more than two fields; records with a blank name are
/// dropped.
pub fn parse_records(content: &str) -> Vec<Candidate> {
    content
        .split('\n')
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(':').collect();
            if fields.len() <= 2 {
                return None;
            }
            let name = fields[0];
            if name.trim().is_empty() {
                return None;
            }
            Some(Candidate::described(name, fields[2]))
        })
        .collect()
}

/// Read and parse a database file. A missing or unreadable file gives an
/// empty set, not a message.
pub fn read_records(ctx: &impl OsContext, path: &Path) -> Completion {
    match ctx.read_file(path) {
        Ok(content) => Completion::Candidates(parse_records(&content)),
        Err(e) => {
            debug!("skipping {:?}: {}", path, e);
            Completion::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::os_context::SystemContext;
    use std::io::Write;

    #[test]
    fn test_passwd_example() {
        let content = "root:x:0:0:root:/root:/bin/bash\nbin:x:1:1:bin:/bin:/sbin/nologin\n";
        let records = parse_records(content);
        assert_eq!(
            records,
            vec![Candidate::described("root", "0"), Candidate::described("bin", "1")]
        );
    }

    #[test]
    fn test_short_lines_skipped() {
        let records = parse_records("a:b\nsolo\n\nwheel:x:10:alice\n");
        assert_eq!(records, vec![Candidate::described("wheel", "10")]);
    }

    #[test]
    fn test_three_fields_is_enough() {
        assert_eq!(parse_records("adm:x:4"), vec![Candidate::described("adm", "4")]);
    }

    #[test]
    fn test_blank_name_skipped() {
        let records = parse_records("   :x:5:5:y:z\n:x:6:6\nok:x:7:7:y\n");
        assert_eq!(records, vec![Candidate::described("ok", "7")]);
    }

    #[test]
    fn test_name_kept_untrimmed() {
        let records = parse_records(" svc:x:99:99");
        assert_eq!(records[0].value, " svc");
    }

    #[test]
    fn test_read_records_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "audio:x:29:pulse\nvideo:x:44:\n").unwrap();

        let completion = read_records(&SystemContext::default(), file.path());
        assert_eq!(completion.value_list(), vec!["audio", "video"]);
    }

    #[test]
    fn test_invalid_utf8_keeps_every_record() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"root:x:0:0:root:/root:/bin/bash\njose:x:1000:1000:Jos\xe9:/home/jose:/bin/sh\n")
            .unwrap();

        let completion = read_records(&SystemContext::default(), file.path());
        assert_eq!(
            completion.candidates(),
            &[Candidate::described("root", "0"), Candidate::described("jose", "1000")]
        );
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let completion = read_records(&SystemContext::default(), &dir.path().join("group"));
        assert_eq!(completion, Completion::empty());
    }
}
