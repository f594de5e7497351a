// Each whitespace kind maps to a fixed positional substring of $IFS.
// This assumes the receiving shell's IFS starts with space, tab,
// newline; nothing here verifies that.
const REPLACERS: [(char, &str); 3] = [
    (' ', "${IFS:0:1}"),
    ('\t', "${IFS:1:1}"),
    ('\n', "${IFS:2:1}"),
];

/// Rewrites `command` so it contains no literal whitespace.
///
/// For each whitespace kind, the shorter of two rewrites wins: the $IFS
/// substring inlined at every occurrence, or a one-letter variable
/// assigned once up front and referenced at every occurrence. Ties keep
/// the inline form.
pub fn obfuscate(command: &str) -> String {
    let mut cmd = command.to_owned();
    let mut var_name = 'A';

    for (ws, expansion) in REPLACERS {
        if !cmd.contains(ws) {
            continue;
        }

        let with_ifs = cmd.replace(ws, expansion);
        let with_var = format!(
            "{var_name}={expansion};{}",
            cmd.replace(ws, &format!("${{{var_name}}}"))
        );

        if with_var.len() < with_ifs.len() {
            cmd = with_var;
            var_name = (var_name as u8 + 1) as char;
        } else {
            cmd = with_ifs;
        }
    }

    cmd
}

#[cfg(test)]
mod obfuscate_tests {
    use super::*;

    #[test]
    fn it_should_leave_whitespace_free_commands_alone() {
        assert_eq!("id", obfuscate("id"));
    }

    #[test]
    fn it_should_prefer_the_inline_form_for_few_occurrences() {
        assert_eq!("ls${IFS:0:1}-l", obfuscate("ls -l"));
    }

    #[test]
    fn it_should_switch_to_a_variable_when_that_is_shorter() {
        assert_eq!(
            "A=${IFS:0:1};a${A}b${A}c${A}d${A}e",
            obfuscate("a b c d e")
        );
    }

    #[test]
    fn it_should_allocate_a_fresh_variable_per_whitespace_kind() {
        assert_eq!(
            "B=${IFS:1:1};A=${IFS:0:1};a${A}b${A}c${A}d${B}e${B}f${B}g",
            obfuscate("a b c d\te\tf\tg")
        );
    }

    #[test]
    fn it_should_handle_every_whitespace_kind() {
        assert_eq!(
            "a${IFS:0:1}b${IFS:1:1}c${IFS:2:1}d",
            obfuscate("a b\tc\nd")
        );
    }

    #[test]
    fn it_should_be_reversible_in_the_inline_form() {
        let original = "tar czf x.tgz\t/home\nls";
        let mut restored = obfuscate(original);
        for (ws, expansion) in REPLACERS {
            restored = restored.replace(expansion, &ws.to_string());
        }

        assert!(!restored.contains("${"));
        assert_eq!(original, restored);
    }

    #[test]
    fn it_should_be_reversible_in_the_variable_form() {
        let restored = obfuscate("a b c d e")
            .strip_prefix("A=${IFS:0:1};")
            .unwrap()
            .replace("${A}", " ");

        assert_eq!("a b c d e", restored);
    }

    #[test]
    fn it_should_emit_no_literal_whitespace() {
        for command in ["ls -la /tmp", "a b c d e f", "x\ty\tz", "a\nb\nc\nd e f g"] {
            let obfuscated = obfuscate(command);
            assert!(
                !obfuscated.contains([' ', '\t', '\n']),
                "{obfuscated:?} still contains whitespace"
            );
        }
    }
}
