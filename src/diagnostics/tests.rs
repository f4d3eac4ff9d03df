#[cfg(test)]
mod tests {
    use crate::{
        diagnostics::{ConsoleWriter, JsonWriter, Writer},
        linter::{Diagnostic, Report},
    };

    fn report() -> Report {
        let mut report = Report::new(3, "LINTEXCLUDE");
        report.extend(vec![
            Diagnostic::UnusedSuffix {
                function: "Foo_T1".into(),
            },
            Diagnostic::UnderDeclaredCalls {
                function: "A_T1".into(),
                callees: vec!["B_T3".into(), "C_T2".into()],
                highest: 3,
                suggested: "_T3".into(),
            },
        ]);
        report
    }

    #[test]
    fn console_one_line_per_diagnostic() {
        let w = ConsoleWriter::new(Vec::<u8>::new());
        w.write_report(&report()).unwrap();
        let out = String::from_utf8(w.into_inner()).unwrap();
        assert_eq!(
            out,
            "[LINT]: function Foo_T1 has a suffix implying temporaries while not using any.\n\
             [LINT]: function A_T1 calls B_T3, C_T2. Either change suffix to _T3 or use ';LINTEXCLUDE'.\n"
        );
    }

    #[test]
    fn console_clean_report_writes_nothing() {
        let w = ConsoleWriter::new(Vec::<u8>::new());
        w.write_report(&Report::new(1, "LINTEXCLUDE")).unwrap();
        assert!(w.into_inner().is_empty());
    }

    #[test]
    fn json_document() {
        let w = JsonWriter::new(Vec::<u8>::new());
        w.write_report(&report()).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&w.into_inner()).unwrap();

        assert_eq!(doc["functions"], 3);
        assert_eq!(doc["violations"], true);
        let diags = doc["diagnostics"].as_array().unwrap();
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0]["kind"], "unused-suffix");
        assert_eq!(diags[0]["function"], "Foo_T1");
        assert_eq!(diags[1]["kind"], "under-declared-calls");
        assert_eq!(diags[1]["callees"][1], "C_T2");
        assert_eq!(diags[1]["highest"], 3);
        assert!(diags[1]["message"]
            .as_str()
            .unwrap()
            .starts_with("[LINT]: function A_T1 calls"));
    }

    #[test]
    fn json_clean_report() {
        let w = JsonWriter::new(Vec::<u8>::new());
        w.write_report(&Report::new(0, "LINTEXCLUDE")).unwrap();
        let doc: serde_json::Value = serde_json::from_slice(&w.into_inner()).unwrap();
        assert_eq!(doc["violations"], false);
        assert!(doc["diagnostics"].as_array().unwrap().is_empty());
    }
}
