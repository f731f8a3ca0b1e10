use rolecast::{EnglishAnalyzer, RoleRecord};
use std::cell::RefCell;

fn print_records(records: &[RoleRecord], indent: usize) {
    let pad = "  ".repeat(indent);
    for (idx, rec) in records.iter().enumerate() {
        println!("{}record {}:", pad, idx + 1);
        for agent in &rec.agents {
            println!("{}  agent    : {}", pad, agent);
        }
        println!("{}  action   : {}", pad, rec.action);
        for patient in &rec.patients {
            println!("{}  patient  : {}", pad, patient);
        }
        for modifier in &rec.modifiers {
            println!("{}  modifier : {}", pad, modifier);
        }
        if !rec.subclauses.is_empty() {
            println!("{}  subclauses:", pad);
            print_records(&rec.subclauses, indent + 2);
        }
    }
}

fn analyze_line(analyzer: &EnglishAnalyzer, sentence: &str, verbose: bool, json: bool) {
    if verbose {
        if let Ok(trees) = analyzer.parse(sentence) {
            for (idx, tree) in trees.iter().enumerate() {
                println!("parse {}:", idx + 1);
                print!("{}", tree.print());
            }
        }
    }
    match analyzer.analyze(sentence) {
        Ok(records) if json => {
            println!("{}", serde_json::to_string_pretty(&records).unwrap());
        }
        Ok(records) => print_records(&records, 0),
        Err(e) => println!("no analysis: {}", e),
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "-v");
    let json = args.iter().any(|a| a == "--json");
    let sentence = args
        .iter()
        .filter(|a| *a != "-v" && *a != "--json")
        .cloned()
        .collect::<Vec<String>>()
        .join(" ");

    let analyzer = EnglishAnalyzer::english();

    if !sentence.is_empty() {
        analyze_line(&analyzer, &sentence, verbose, json);
        return;
    }

    let rl = RefCell::new(rustyline::DefaultEditor::new().unwrap());
    let input = (0..)
        .map(|_| rl.borrow_mut().readline("sentence> "))
        .take_while(|line| line.is_ok())
        .map(|line| line.unwrap());
    for line in input {
        let line = line.trim().to_string();
        if line.is_empty() {
            continue;
        }
        if matches!(line.as_str(), "quit" | "exit" | "q") {
            break;
        }
        let _ = rl.borrow_mut().add_history_entry(&line);
        analyze_line(&analyzer, &line, verbose, json);
    }
}
