use larder::prelude::*;
use std::env;
use std::process;

fn print_usage() {
    eprintln!("Usage: larder <path/to/recipes.csv> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --filter <expr>     keep recipes matching a boolean expression");
    eprintln!("                      (variables: cheap, quick, healthy, easy)");
    eprintln!("  --sort <field>      sort by: name, price, time, calories");
    eprintln!("  --algo <name>       sorting algorithm: bubble, merge (default merge)");
    eprintln!("  --table <expr>      print the truth table for an expression and exit");
    eprintln!("  --thresholds <file> JSON file overriding predicate thresholds");
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let mut csv_path = None;
    let mut filter = None;
    let mut sort_field = None;
    let mut algorithm = Algorithm::Merge;
    let mut table_expr = None;
    let mut thresholds_path = None;

    let mut iter = args[1..].iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--filter" => filter = iter.next().cloned(),
            "--sort" => sort_field = iter.next().cloned(),
            "--algo" => match iter.next().map(String::as_str) {
                Some("bubble") => algorithm = Algorithm::Bubble,
                Some("merge") => algorithm = Algorithm::Merge,
                other => {
                    eprintln!("Unknown algorithm: {:?}", other.unwrap_or("<missing>"));
                    process::exit(1);
                }
            },
            "--table" => table_expr = iter.next().cloned(),
            "--thresholds" => thresholds_path = iter.next().cloned(),
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other if csv_path.is_none() && !other.starts_with('-') => {
                csv_path = Some(other.to_string());
            }
            other => {
                eprintln!("Unrecognized argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
    }

    // Truth table mode needs no recipe data.
    if let Some(expr) = table_expr {
        match truth_table(&expr) {
            Ok(table) => {
                println!("Truth table for: {}", expr);
                print!("{}", table);
            }
            Err(e) => {
                eprintln!("Invalid expression: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    let csv_path = match csv_path {
        Some(path) => path,
        None => {
            print_usage();
            process::exit(1);
        }
    };

    println!("Loading recipes from: {}", csv_path);
    let book = match RecipeBook::load_csv(&csv_path) {
        Ok(book) => book,
        Err(e) => {
            eprintln!("Failed to load '{}': {}", csv_path, e);
            process::exit(1);
        }
    };
    println!("Loaded {} recipes", book.len());

    let thresholds = match thresholds_path {
        Some(path) => match Thresholds::from_file(&path) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Failed to load thresholds from '{}': {}", path, e);
                process::exit(1);
            }
        },
        None => Thresholds::default(),
    };
    let predicates = PredicateSet::from_thresholds(thresholds);

    let selected: Vec<Recipe> = match &filter {
        Some(expr) => match book.filter_expr(expr, &predicates) {
            Ok(matches) => {
                println!("{} of {} recipes match '{}'", matches.len(), book.len(), expr);
                matches.into_iter().cloned().collect()
            }
            Err(e) => {
                eprintln!("Filter failed: {}", e);
                process::exit(1);
            }
        },
        None => book.recipes().to_vec(),
    };

    let ordered = match sort_field.as_deref() {
        None => selected,
        Some("name") => algorithm.sort_by_key(&selected, |r| r.name.to_lowercase()),
        Some("price") => {
            // Prices are validated non-negative and finite, so cent-integer
            // keys give a total order.
            algorithm.sort_by_key(&selected, |r| (r.price * 100.0).round() as u64)
        }
        Some("time") => algorithm.sort_by_key(&selected, |r| r.time_minutes),
        Some("calories") => algorithm.sort_by_key(&selected, |r| r.calories),
        Some(other) => {
            eprintln!("Unknown sort field: {}", other);
            process::exit(1);
        }
    };

    for recipe in &ordered {
        println!("{}", recipe);
    }
}
