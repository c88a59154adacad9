use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use itertools::Itertools;
use markdown_table::MarkdownTable;

use crate::convergence_measure::convergence_measure;
use crate::igd::igd_against;
use crate::problem::{family_for, generation_count, objective_count};
use crate::reference_front::{front_path, load_front};
use crate::trial_parser::parse_trials;

pub const SUMMARY_HEADER: &str = "dataset,m,method,trial,cm,igd";

/// Trials required before a configuration is considered complete.
pub const DEFAULT_COMPLETENESS_THRESHOLD: usize = 30;

/// Everything one aggregation run needs to know.
///
/// The defaults reproduce the benchmark sweep: dtlz1-4 at 3 to 100
/// objectives, the three selection strategies, one result directory.
pub struct AnalysisConfig {
    pub problems: Vec<String>,
    pub selectors: Vec<String>,
    pub data_paths: Vec<PathBuf>,
    pub front_dir: PathBuf,
    pub output_path: PathBuf,
    pub completeness_threshold: usize,
}

impl Default for AnalysisConfig
{
    fn default() -> Self
    {
        let problems = ["dtlz1", "dtlz2", "dtlz3", "dtlz4"]
            .iter()
            .cartesian_product(&[3, 5, 25, 50, 75, 100])
            .map(|(family, m)| format!("{}_m{}", family, m))
            .collect();

        AnalysisConfig {
            problems,
            selectors: vec!["lex".to_string(), "nsga2".to_string(), "hype".to_string()],
            data_paths: vec![PathBuf::from("runs")],
            front_dir: PathBuf::from("pareto_fronts"),
            output_path: PathBuf::from("summary.csv"),
            completeness_threshold: DEFAULT_COMPLETENESS_THRESHOLD,
        }
    }
}

/// Resolve a result file under both naming conventions.
///
/// The optimizer writes `<problem>_<selector>.<generations>`, but some run
/// batches carry a trailing underscore before the extension.
fn result_file_path(dir: &Path, problem: &str, selector: &str, generations: usize) -> PathBuf {
    let primary = dir.join(format!("{}_{}.{}", problem, selector, generations));

    if primary.exists()
    {
        primary
    }
    else
    {
        dir.join(format!("{}_{}_.{}", problem, selector, generations))
    }
}

/// Walk every configured (problem, selector, directory) combination,
/// score each parsed trial and append it to the summary table.
///
/// A missing or malformed result file skips that combination only; the
/// run always finishes and always leaves a readable (possibly partial)
/// summary behind. Returned counts cover every (problem, selector) key,
/// including the ones that produced nothing.
pub fn run_analysis(
    config: &AnalysisConfig,
) -> std::io::Result<HashMap<(String, String), usize>>
{
    let mut out = File::create(&config.output_path)?;
    writeln!(out, "{}", SUMMARY_HEADER)?;

    let mut trial_counts: HashMap<(String, String), usize> = HashMap::new();

    for (problem, selector) in config.problems.iter().cartesian_product(&config.selectors)
    {
        trial_counts.insert((problem.clone(), selector.clone()), 0);
    }

    for problem in &config.problems
    {
        let front = match load_front(&front_path(&config.front_dir, problem))
        {
            Ok(front) => front,
            Err(err) => {
                println!("skipping {}: cannot load reference front ({})", problem, err);
                continue;
            }
        };

        let family = family_for(problem);
        let m = objective_count(problem);
        let generations = generation_count(problem);

        for selector in &config.selectors
        {
            let key = (problem.clone(), selector.clone());

            for dir in &config.data_paths
            {
                let path = result_file_path(dir, problem, selector, generations);

                let text = match std::fs::read_to_string(&path)
                {
                    Ok(text) => text,
                    Err(_) => {
                        println!("skipping {} - {}: no result file in {}", problem, selector, dir.display());
                        continue;
                    }
                };

                let sets = match parse_trials(&text)
                {
                    Ok(sets) => sets,
                    Err(err) => {
                        println!("warning: skipping malformed file {} ({})", path.display(), err);
                        continue;
                    }
                };

                // Vectors must be scored in the front's objective space;
                // a file of wrong-dimensional vectors is malformed, not
                // a shorter match.
                if let Some(set) = sets.iter().find(|set| set[0].len() != front.ncols())
                {
                    println!(
                        "warning: skipping malformed file {} (vectors have {} objectives, front has {})",
                        path.display(),
                        set[0].len(),
                        front.ncols()
                    );
                    continue;
                }

                for set in &sets
                {
                    let count = trial_counts.get_mut(&key).unwrap();
                    *count += 1;
                    let trial = *count;

                    let cm = convergence_measure(set, family.as_ref());
                    let igd = igd_against(set, &front);

                    writeln!(out, "{},{},{},{},{},{}", problem, m, selector, trial, cm, igd)?;
                }
            }
        }
    }

    print_completeness_report(config, &trial_counts);

    Ok(trial_counts)
}

/// Per-configuration trial counts as a markdown table, flagging every
/// (problem, selector) key still short of the completeness threshold.
fn print_completeness_report(config: &AnalysisConfig, trial_counts: &HashMap<(String, String), usize>) {
    let mut table_lines = vec![vec![
        "problem".to_string(),
        "selector".to_string(),
        "trials".to_string(),
        "status".to_string(),
    ]];

    for (problem, selector) in config.problems.iter().cartesian_product(&config.selectors)
    {
        let count = trial_counts[&(problem.clone(), selector.clone())];

        let status = if count < config.completeness_threshold
        {
            "needs more data"
        }
        else
        {
            "ok"
        };

        table_lines.push(vec![
            problem.clone(),
            selector.clone(),
            count.to_string(),
            status.to_string(),
        ]);
    }

    let table = MarkdownTable::new(table_lines);

    println!("{}", table.to_string());
}
