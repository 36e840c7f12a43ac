//! Python source fixtures

use flowchart_ir::config::FlowchartConfig;
use flowchart_ir::{ConvertSourceUseCase, Flowchart, TreeSitterParser};

/// Function with a single return
pub const FIXTURE_FUNCTION_RETURN: &str = "def f(x):\n    return x\n";

/// if/else with one assignment per branch
pub const FIXTURE_IF_ELSE: &str = "if a:\n    x = 1\nelse:\n    x = 2\n";

/// Every recognized construct at least once
pub const FIXTURE_ALL_CONSTRUCTS: &str = r#"import os

@dataclass
class Config:
    name = "default"

    def load(self, path):
        with open(path) as f:
            data = f.read()
        return data

def main(items):
    total = 0
    for item in items:
        if item > 0:
            total = total + item
        else:
            print(item)
    while total > 100:
        total = total - 1
    try:
        squares = [i * i for i in items]
    except ValueError as e:
        log(e)
    except:
        pass
    [x for x in items]
    return total
"#;

/// Generate a Python file with N functions, each returning its index
pub fn fixture_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| format!("def func_{i}():\n    return {i}\n\n"))
        .collect()
}

/// Generate an `if` nested `depth` levels deep around one call
pub fn fixture_nested_ifs(depth: usize) -> String {
    let mut source = String::new();
    for level in 0..depth {
        source.push_str(&"    ".repeat(level));
        source.push_str(&format!("if c{level}:\n"));
    }
    source.push_str(&"    ".repeat(depth));
    source.push_str("work()\n");
    source
}

/// Convert with default settings
pub fn convert(source: &str) -> Flowchart {
    convert_with(source, FlowchartConfig::default())
}

/// Convert with explicit settings
pub fn convert_with(source: &str, config: FlowchartConfig) -> Flowchart {
    ConvertSourceUseCase::new(TreeSitterParser::python(), config)
        .execute(source, "test.py")
        .unwrap_or_else(|e| panic!("conversion failed for {:?}: {}", source, e))
}
