#[derive(Debug)]
pub struct CrawlResult {
    pub domains: Vec<String>,
    pub counts: Vec<Option<usize>>,
}

pub fn format_result_line(domain: &str, count: Option<usize>, letter: char) -> String {
    match count {
        Some(count) => format!("{} tiene {} letras {} en su título", domain, count, letter),
        None => format!("{} no se pudo obtener título html", domain),
    }
}

pub fn print_results(result: &CrawlResult, letter: char) {
    for (domain, count) in result.domains.iter().zip(result.counts.iter()) {
        println!("{}", format_result_line(domain, *count, letter));
    }
}
