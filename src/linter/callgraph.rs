use std::collections::{BTreeMap, BTreeSet};

use super::function::FunctionMap;

/// Which functions each function refers to.
///
/// An instruction refers to a function when the function's name appears in
/// it. Only the first matching name, in map order, counts for an instruction,
/// and a function never counts as referring to itself. Each callee is listed
/// once, in the order it was first referenced.
#[derive(Debug, Default)]
pub struct CallGraph {
    edges: BTreeMap<String, Vec<String>>,
}

impl CallGraph {
    pub fn build(functions: &FunctionMap) -> CallGraph {
        let mut edges = BTreeMap::new();

        for caller in functions.iter() {
            let mut callees: Vec<String> = vec![];
            for instruction in caller.instructions() {
                let callee = functions
                    .names()
                    .find(|name| *name != caller.name() && instruction.text().contains(name));

                if let Some(callee) = callee {
                    if !callees.iter().any(|c| c == callee) {
                        callees.push(callee.into());
                    }
                }
            }
            edges.insert(caller.name().to_string(), callees);
        }

        CallGraph { edges }
    }

    /// Functions referenced directly by `name`
    pub fn callees(&self, name: &str) -> &[String] {
        self.edges.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every function reachable from `name` through one or more references,
    /// in depth first order. `name` itself is never included.
    pub fn reachable<'a>(&'a self, name: &'a str) -> Vec<&'a str> {
        let mut visited: BTreeSet<&str> = BTreeSet::new();
        visited.insert(name);

        let mut order = vec![];
        let mut stack: Vec<&str> = self.callees(name).iter().rev().map(String::as_str).collect();
        while let Some(next) = stack.pop() {
            if !visited.insert(next) {
                continue;
            }
            order.push(next);
            stack.extend(self.callees(next).iter().rev().map(String::as_str));
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::{io::normalize, project::Program};

    fn graph(src: &str) -> CallGraph {
        let program = Program::from_lines(Path::new("t.s"), normalize(src, "LINTEXCLUDE"));
        let functions = FunctionMap::extract(&program, "LINTEXCLUDE").unwrap();
        CallGraph::build(&functions)
    }

    #[test]
    fn direct_references() {
        let g = graph(
            "
            .proc A
            jsr B
            jsr C
            jsr B
            .endproc
            .proc B
            rts
            .endproc
            .proc C
            jsr B
            .endproc",
        );
        assert_eq!(g.callees("A"), ["B", "C"]);
        assert_eq!(g.callees("B"), [] as [&str; 0]);
        assert_eq!(g.callees("C"), ["B"]);
        assert!(g.callees("Unknown").is_empty());
    }

    #[test]
    fn self_reference_is_not_a_call() {
        let g = graph(".proc Loop\nLoop_top:\njmp Loop_top\n.endproc");
        assert!(g.callees("Loop").is_empty());
    }

    #[test]
    fn first_name_in_map_order_wins() {
        // "Draw" is a substring of "DrawFast"; "Draw" sorts first so it is the match
        let g = graph(
            "
            .proc Caller
            jsr DrawFast
            .endproc
            .proc Draw
            .endproc
            .proc DrawFast
            .endproc",
        );
        assert_eq!(g.callees("Caller"), ["Draw"]);
    }

    #[test]
    fn reachable_follows_every_hop_and_survives_cycles() {
        let g = graph(
            "
            .proc A
            jsr B
            jsr D
            .endproc
            .proc B
            jsr C
            .endproc
            .proc C
            jsr A
            .endproc
            .proc D
            .endproc",
        );
        assert_eq!(g.reachable("A"), vec!["B", "C", "D"]);
        assert_eq!(g.reachable("C"), vec!["A", "B", "D"]);
        assert!(g.reachable("D").is_empty());
    }
}
