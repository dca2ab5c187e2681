//! Built-in reference tables. Loaded into `ReferenceData` once at startup;
//! any of them can be replaced through `REFERENCE_DATA_PATH`.

use crate::matching::domain::Domain;

/// Local degree hierarchy, in priority order for nearest-degree tie-breaks.
pub const DEGREE_RANKS: &[(&str, f64)] = &[
    ("PhD", 6.0),
    ("MTech", 5.0),
    ("MS", 5.0),
    ("MSc", 5.0),
    ("MCA", 3.5),
    ("BTech", 3.0),
    ("BE", 3.0),
    ("BSc", 2.0),
    ("BCA", 1.0),
    ("Diploma", 0.5),
];

pub const DEGREE_SYNONYMS: &[(&str, &str)] = &[
    ("B.E.", "BE"),
    ("B.Sc.", "BSc"),
    ("M.Sc.", "MSc"),
    ("Master of Science", "MSc"),
    ("Bachelor of Technology", "BTech"),
    ("Bachelor of Science", "BSc"),
    ("Bachelor of Engineering", "BE"),
    ("Master of Technology", "MTech"),
    ("Master of Engineering", "MTech"),
    ("Bachelor of Computer Applications", "BCA"),
    ("Master of Computer Applications", "MCA"),
    ("Doctor of Philosophy", "PhD"),
    ("Doctorate", "PhD"),
    ("B.Tech", "BTech"),
    ("M.Tech", "MTech"),
    ("M.S.", "MS"),
];

pub const MAJOR_ALIASES: &[(&str, &str)] = &[
    ("cs", "computer science"),
    ("cse", "computer science engineering"),
    ("it", "information technology"),
    ("is", "information systems"),
    ("se", "software engineering"),
    ("ai", "artificial intelligence"),
    ("ml", "machine learning"),
    ("ce", "computer engineering"),
    ("ee", "electrical engineering"),
    ("me", "mechanical engineering"),
    ("eee", "electrical and electronics engineering"),
    ("ece", "electronics and communication engineering"),
    ("civil", "civil engineering"),
    ("chem eng", "chemical engineering"),
    ("bio tech", "biotechnology"),
    ("chem", "chemistry"),
    ("biochem", "biochemistry"),
    ("bio", "biology"),
    ("math", "mathematics"),
    ("maths", "mathematics"),
    ("stats", "statistics"),
    ("econ", "economics"),
    ("psych", "psychology"),
    ("socio", "sociology"),
    ("polsci", "political science"),
    ("lit", "literature"),
    ("eng lit", "english literature"),
    ("phil", "philosophy"),
    ("hist", "history"),
    ("geo", "geography"),
    ("anthro", "anthropology"),
    ("bba", "business administration"),
    ("mba", "master of business administration"),
    ("fin", "finance"),
    ("acct", "accounting"),
    ("mktg", "marketing"),
    ("hr", "human resources"),
];

/// Abbreviations expand onto the spelling used in `SKILL_CATEGORIES`.
pub const SKILL_ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("python3", "python"),
    ("golang", "go"),
    ("cpp", "c++"),
    ("csharp", "c#"),
    ("rb", "ruby"),
    ("k8s", "kubernetes"),
    ("ai", "artificial intelligence"),
    ("ml", "machine learning"),
    ("dl", "deep learning"),
    ("nlp", "natural language processing"),
    ("cv", "computer vision"),
    ("rl", "reinforcement learning"),
    ("nn", "neural networks"),
    ("llms", "llm"),
    ("tf", "tensorflow"),
    ("sklearn", "scikit-learn"),
    ("scikit learn", "scikit-learn"),
    ("postgres", "postgresql"),
    ("psql", "postgresql"),
    ("pg", "postgresql"),
    ("mongo", "mongodb"),
    ("dynamo", "dynamodb"),
    ("elastic", "elasticsearch"),
    ("node", "node.js"),
    ("nodejs", "node.js"),
    ("expressjs", "express.js"),
    ("express", "express.js"),
    ("reactjs", "react"),
    ("react.js", "react"),
    ("vuejs", "vue"),
    ("vue.js", "vue"),
    ("angularjs", "angular"),
    ("next", "nextjs"),
    ("next.js", "nextjs"),
    ("amazon web services", "aws"),
    ("google cloud platform", "gcp"),
    ("google cloud", "gcp"),
    ("microsoft azure", "azure"),
    ("cicd", "ci/cd"),
    ("ci cd", "ci/cd"),
    ("iac", "infrastructure as code"),
    ("ds", "data science"),
    ("da", "data analysis"),
    ("dataviz", "data visualization"),
    ("rn", "react native"),
    ("ios development", "ios"),
    ("android development", "android"),
    ("qa", "qa processes"),
    ("tdd", "test driven development"),
    ("ui", "user interface"),
    ("ux", "user research"),
    ("pentest", "penetration testing"),
    ("html5", "html"),
    ("css3", "css"),
    ("rest api", "restful api"),
    ("rest apis", "restful api"),
    ("restful apis", "restful api"),
    ("powerbi", "power bi"),
];

pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "web development",
        &[
            "html", "css", "javascript", "typescript", "react", "angular", "vue", "jquery",
            "bootstrap", "sass", "webpack", "frontend", "backend", "fullstack",
            "responsive design", "spa", "pwa", "web design", "dom", "ajax", "restful api",
            "node.js", "express.js", "nextjs",
        ],
    ),
    (
        "ai",
        &[
            "artificial intelligence", "machine learning", "deep learning", "neural networks",
            "natural language processing", "computer vision", "reinforcement learning",
            "tensorflow", "pytorch", "keras", "scikit-learn", "transformers", "llm",
        ],
    ),
    (
        "data science",
        &[
            "data analysis", "big data", "data mining", "data visualization", "statistics",
            "python", "r", "pandas", "numpy", "scipy", "matplotlib", "tableau", "power bi",
            "sql", "database", "etl", "data warehouse", "predictive modeling", "regression",
            "classification", "clustering", "time series", "hypothesis testing",
        ],
    ),
    (
        "backend development",
        &[
            "node.js", "express.js", "django", "flask", "fastapi", "php", "laravel",
            "ruby on rails", "spring boot", "java", "c#", ".net", "go", "rust", "api",
            "restful api", "graphql", "database", "mysql", "postgresql", "mongodb", "redis",
            "orm", "microservices",
        ],
    ),
    (
        "devops",
        &[
            "docker", "kubernetes", "aws", "azure", "gcp", "terraform", "ansible", "jenkins",
            "gitlab ci", "github actions", "ci/cd", "infrastructure as code", "monitoring",
            "logging", "linux", "bash", "shell", "cloud computing", "networking",
        ],
    ),
    (
        "mobile development",
        &[
            "android", "ios", "swift", "kotlin", "flutter", "dart", "react native", "xamarin",
            "objective-c", "mobile ui", "app store", "google play", "firebase",
        ],
    ),
    (
        "cloud computing",
        &[
            "aws", "azure", "gcp", "lambda", "ec2", "s3", "kubernetes", "serverless",
            "cloudformation", "terraform", "cloud storage", "cloud security", "multi-cloud",
            "load balancing", "auto-scaling", "cloud migration", "cloudwatch",
        ],
    ),
    (
        "cybersecurity",
        &[
            "network security", "ethical hacking", "penetration testing", "siem", "firewalls",
            "vpn", "encryption", "ssl/tls", "owasp", "vulnerability assessment",
            "incident response", "iso 27001", "zero trust", "iam", "oauth", "jwt",
        ],
    ),
    (
        "testing/qa",
        &[
            "unit testing", "integration testing", "test automation", "selenium", "cypress",
            "jest", "junit", "pytest", "load testing", "jmeter", "postman", "tdd",
            "test driven development", "qa processes", "regression testing",
            "performance testing",
        ],
    ),
    (
        "frontend development",
        &[
            "react", "angular", "vue", "svelte", "redux", "web components", "accessibility",
            "responsive design", "web performance", "graphql", "webassembly", "user interface",
            "html", "css", "javascript", "typescript",
        ],
    ),
    (
        "database",
        &[
            "sql", "nosql", "mysql", "postgresql", "mongodb", "redis", "cassandra",
            "dynamodb", "sqlite", "elasticsearch", "database design", "orm", "indexing",
            "query optimization", "transactions", "replication", "sharding", "data modeling",
        ],
    ),
    (
        "networking",
        &[
            "tcp/ip", "dns", "http", "grpc", "websockets", "cdn", "vpc", "subnets", "routing",
            "load balancers", "api gateway", "ssh", "wireshark",
        ],
    ),
    (
        "ui/ux design",
        &[
            "figma", "sketch", "adobe xd", "user research", "wireframing", "prototyping",
            "design systems", "usability testing", "interaction design", "user flows",
            "information architecture",
        ],
    ),
    (
        "embedded systems",
        &[
            "iot", "arduino", "raspberry pi", "rtos", "firmware", "device drivers", "sensors",
            "embedded linux", "real-time systems", "c", "c++",
        ],
    ),
    (
        "soft skills",
        &[
            "communication", "teamwork", "problem-solving", "critical thinking",
            "time management", "agile", "scrum", "kanban", "mentoring", "technical writing",
            "stakeholder management", "leadership",
        ],
    ),
    (
        "game development",
        &[
            "unity", "unreal engine", "c#", "3d modeling", "physics engines", "shaders",
            "game ai", "multiplayer networking", "game design",
        ],
    ),
];

/// Symmetric "demonstrates the same requirement" pairs used by project matching.
pub const SKILL_RELATIONS: &[(&str, &[&str])] = &[
    ("sql", &["postgresql", "mysql", "sqlite", "database", "oracle"]),
    ("nosql", &["mongodb", "dynamodb", "cassandra", "redis"]),
    ("javascript", &["typescript", "react", "angular", "vue", "node.js", "jquery"]),
    ("python", &["django", "flask", "fastapi", "pandas", "numpy"]),
    ("java", &["spring boot", "kotlin"]),
    ("machine learning", &["scikit-learn", "tensorflow", "pytorch", "keras", "deep learning"]),
    ("deep learning", &["tensorflow", "pytorch", "keras", "neural networks"]),
    ("natural language processing", &["transformers", "llm"]),
    ("data analysis", &["pandas", "numpy", "statistics", "data visualization"]),
    ("data visualization", &["matplotlib", "tableau", "power bi"]),
    ("ci/cd", &["jenkins", "github actions", "gitlab ci"]),
    ("cloud computing", &["aws", "azure", "gcp"]),
    ("containers", &["docker", "kubernetes"]),
    ("restful api", &["api", "express.js", "fastapi", "flask", "django"]),
    ("frontend", &["react", "angular", "vue", "html", "css"]),
    ("mobile development", &["android", "ios", "flutter", "react native", "swift", "kotlin"]),
];

pub const DOMAIN_KEYWORDS: &[(Domain, &[&str])] = &[
    (
        Domain::MachineLearning,
        &[
            "machine learning", "deep learning", "neural networks", "tensorflow", "pytorch",
            "keras", "scikit-learn", "artificial intelligence", "natural language processing",
            "computer vision", "transformers", "llm", "model", "classifier", "prediction",
        ],
    ),
    (
        Domain::WebDevelopment,
        &[
            "html", "css", "javascript", "typescript", "react", "angular", "vue", "node.js",
            "express.js", "django", "flask", "nextjs", "web", "website", "frontend",
            "backend", "fullstack", "restful api",
        ],
    ),
    (
        Domain::DataScience,
        &[
            "data analysis", "data visualization", "pandas", "numpy", "statistics", "sql",
            "tableau", "power bi", "matplotlib", "data mining", "etl", "analytics",
            "dashboard", "data",
        ],
    ),
    (
        Domain::Devops,
        &[
            "docker", "kubernetes", "aws", "azure", "gcp", "terraform", "ansible", "jenkins",
            "ci/cd", "github actions", "monitoring", "infrastructure as code", "deployment",
            "pipeline", "linux",
        ],
    ),
    (
        Domain::Mobile,
        &[
            "android", "ios", "swift", "kotlin", "flutter", "dart", "react native", "mobile",
            "app", "xamarin",
        ],
    ),
];
