//! Canned example queries linked from the HTML page.

/// A titled query kept as ordered key/value pairs.
#[derive(Clone, Copy, Debug)]
pub struct ExampleQuery {
    pub title: &'static str,
    pub pairs: &'static [(&'static str, &'static str)],
}

impl ExampleQuery {
    /// `k=v&k=v...` with spaces written as `%20`, so `spaces=yes` turns them
    /// back into spaces and the title decodes cleanly.
    #[must_use]
    pub fn query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", encode_spaces(k), encode_spaces(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// `base_url?query`
    #[must_use]
    pub fn link(&self, base_url: &str) -> String {
        format!("{base_url}?{}", self.query_string())
    }
}

fn encode_spaces(s: &str) -> String {
    s.replace(' ', "%20")
}

const PRESIDENTS_TITLE: &str = "Presidents of the United States by age at start of presidency";
const TERRAFORM_TITLE: &str =
    "% of community PRs opened against Terraform after license change (2023)";

pub const EXAMPLES: [ExampleQuery; 2] = [
    ExampleQuery {
        title: PRESIDENTS_TITLE,
        pairs: &[
            ("George Washington (1789)", "57"),
            ("John Adams (1797)", "61"),
            ("Thomas Jefferson (1801)", "57"),
            ("James Madison (1809)", "57"),
            ("James Monroe (1817)", "58"),
            ("John Quincy Adams (1825)", "57"),
            ("Andrew Jackson (1829)", "61"),
            ("Martin Van Buren (1837)", "54"),
            ("William Henry Harrison (1841)", "68"),
            ("John Tyler (1841)", "51"),
            ("James K. Polk (1845)", "49"),
            ("Zachary Taylor (1849)", "64"),
            ("Millard Fillmore (1850)", "50"),
            ("Franklin Pierce (1853)", "48"),
            ("James Buchanan (1857)", "65"),
            ("Abraham Lincoln (1861)", "52"),
            ("Andrew Johnson (1865)", "56"),
            ("Ulysses S. Grant (1869)", "46"),
            ("Rutherford B. Hayes (1877)", "54"),
            ("James A. Garfield (1881)", "49"),
            ("Chester A. Arthur (1881)", "51"),
            ("Grover Cleveland (first term) (1885)", "47"),
            ("Benjamin Harrison (1889)", "55"),
            ("Grover Cleveland (second term) (1893)", "55"),
            ("William McKinley (1897)", "54"),
            ("Theodore Roosevelt (1901)", "42"),
            ("William Howard Taft (1909)", "51"),
            ("Woodrow Wilson (1913)", "56"),
            ("Warren G. Harding (1921)", "55"),
            ("Calvin Coolidge (1923)", "51"),
            ("Herbert Hoover (1929)", "54"),
            ("Franklin D. Roosevelt (1933)", "51"),
            ("Harry S. Truman (1945)", "60"),
            ("Dwight D. Eisenhower (1953)", "62"),
            ("John F. Kennedy (1961)", "43"),
            ("Lyndon B. Johnson (1963)", "55"),
            ("Richard Nixon (1969)", "56"),
            ("Gerald Ford (1974)", "61"),
            ("Jimmy Carter (1977)", "52"),
            ("Ronald Reagan (1981)", "69"),
            ("George H. W. Bush (1989)", "64"),
            ("Bill Clinton (1993)", "46"),
            ("George W. Bush (2001)", "54"),
            ("Barack Obama (2009)", "47"),
            ("Donald Trump (2017)", "70"),
            ("Joe Biden (2021)", "78"),
            ("spaces", "yes"),
            ("sort", "asc"),
            ("title", PRESIDENTS_TITLE),
        ],
    },
    ExampleQuery {
        title: TERRAFORM_TITLE,
        pairs: &[
            ("February", "14.71"),
            ("March", "22.83"),
            ("April", "28.57"),
            ("May", "22.58"),
            ("June", "23.29"),
            ("July", "20.29"),
            ("August", "9.30"),
            ("September", "9.52"),
            ("title", TERRAFORM_TITLE),
        ],
    },
];
