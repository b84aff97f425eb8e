//! 演示程序 - 生成百万人员记录，对比线性位置与哈希探查的检索代价

use std::process;

use rand::{rngs::StdRng, Rng, SeedableRng};

use chained_hashtable::{
    bulk_insert, ChainedHashTable, PersonGenerator, ReportWriter, SearchOutcome,
    SearchStatistics, TableError,
};

const PERSON_COUNT: usize = 1_000_000;
const SEARCH_SIZE: usize = 1_000;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        if let Some(hint) = err.recovery_suggestion() {
            eprintln!("hint: {hint}");
        }
        process::exit(1);
    }
}

fn run() -> Result<(), TableError> {
    println!("Generating CNPs and names...");
    let mut generator = PersonGenerator::new();
    let persons = generator.generate(PERSON_COUNT);

    println!("Building hash table...");
    let mut table = ChainedHashTable::with_defaults();
    bulk_insert(&mut table, persons.iter().cloned());

    println!("Load factor: {:.2}", table.load_factor());

    println!("Selecting random persons for search...");
    let mut rng = StdRng::from_entropy();
    let indices: Vec<usize> = (0..SEARCH_SIZE)
        .map(|_| rng.gen_range(0..PERSON_COUNT))
        .collect();

    println!("Searching for persons...");
    let outcomes: Vec<SearchOutcome> = indices
        .iter()
        .map(|&index| {
            let person = &persons[index];
            SearchOutcome {
                record: person.clone(),
                original_position: index,
                result: table.lookup(&person.key),
            }
        })
        .collect();

    let statistics = SearchStatistics::from_outcomes(&outcomes);

    let writer = ReportWriter::new(".");
    let result_path = writer.write_results(&outcomes)?;
    println!("{} was written successfully", result_path.display());
    let stats_path = writer.write_statistics(&statistics)?;
    println!("{} was written successfully", stats_path.display());

    Ok(())
}
