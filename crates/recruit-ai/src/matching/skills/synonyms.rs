use std::collections::HashMap;

/// Immutable variant-to-canonical skill mapping.
///
/// Built once from fixed groups and shared read-only afterwards; every
/// variant maps to exactly one canonical name and every canonical name maps
/// to itself. When the same variant appears in two groups the later group
/// wins, mirroring how the table was curated.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    entries: HashMap<String, String>,
}

impl SynonymTable {
    /// Table covering the skill vocabulary the extraction step emits.
    pub fn builtin() -> Self {
        Self::from_groups(BUILTIN_GROUPS)
    }

    pub fn from_groups(groups: &[(&str, &[&str])]) -> Self {
        let mut entries = HashMap::new();
        for (canonical, variants) in groups {
            entries.insert((*canonical).to_string(), (*canonical).to_string());
            for variant in *variants {
                entries.insert((*variant).to_string(), (*canonical).to_string());
            }
        }
        Self { entries }
    }

    /// Canonical form for an already lowercased, trimmed token.
    pub fn canonical(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const BUILTIN_GROUPS: &[(&str, &[&str])] = &[
    // Programming languages
    ("javascript", &["js", "ecmascript", "es6", "es2015", "es2020"]),
    ("typescript", &["ts"]),
    ("python", &["python3", "py"]),
    ("java", &["java8", "java11", "java17", "java21", "jdk", "jre"]),
    (
        "c#",
        &["csharp", "c-sharp", "dotnet", ".net", ".net core", "dotnet core"],
    ),
    ("go", &["golang"]),
    ("rust", &["rust-lang"]),
    ("kotlin", &["kt"]),
    ("swift", &["ios swift"]),
    ("objective-c", &["objc", "objective c"]),
    ("ruby", &["ruby on rails", "ror", "rails"]),
    ("php", &["php7", "php8", "laravel", "symfony"]),
    ("scala", &["scala3"]),
    ("r", &["r-lang", "rstats"]),
    // Frontend frameworks
    ("react", &["reactjs", "react.js", "react js"]),
    ("angular", &["angularjs", "angular.js", "angular2", "angular 2"]),
    ("vue", &["vuejs", "vue.js", "vue3", "vue 3"]),
    ("svelte", &["sveltejs", "svelte.js"]),
    ("nextjs", &["next.js", "next js", "next"]),
    ("nuxt", &["nuxtjs", "nuxt.js"]),
    ("jquery", &["j-query"]),
    // Backend frameworks
    ("nodejs", &["node.js", "node js", "node"]),
    ("express", &["expressjs", "express.js"]),
    ("nestjs", &["nest.js", "nest js"]),
    (
        "spring",
        &["spring boot", "springboot", "spring-boot", "spring framework"],
    ),
    ("django", &["django rest", "drf"]),
    ("flask", &["flask-restful"]),
    ("fastapi", &["fast api", "fast-api"]),
    ("asp.net", &["aspnet", "asp net", "asp.net core", "aspnet core"]),
    // Databases
    ("postgresql", &["postgres", "pg", "psql"]),
    ("mysql", &["mariadb", "maria db"]),
    ("mongodb", &["mongo", "mongo db"]),
    ("redis", &["redis cache", "redis db"]),
    ("elasticsearch", &["elastic search", "es", "elk"]),
    ("cassandra", &["apache cassandra"]),
    ("dynamodb", &["dynamo db", "aws dynamodb"]),
    ("sql server", &["mssql", "ms sql", "microsoft sql"]),
    ("oracle", &["oracle db", "oracledb", "oracle database"]),
    ("sqlite", &["sqlite3"]),
    ("neo4j", &["neo 4j"]),
    ("couchbase", &["couch base"]),
    // Cloud platforms
    ("aws", &["amazon web services", "amazon aws", "amazon cloud"]),
    ("azure", &["microsoft azure", "ms azure", "azure cloud"]),
    ("gcp", &["google cloud", "google cloud platform", "gcloud"]),
    ("heroku", &["heroku cloud"]),
    ("digitalocean", &["digital ocean", "do"]),
    ("ibm cloud", &["ibm", "bluemix"]),
    // Containers and orchestration
    ("docker", &["docker container", "containerization"]),
    ("kubernetes", &["k8s", "kube", "k8", "kubectl"]),
    ("openshift", &["open shift", "redhat openshift"]),
    ("docker compose", &["docker-compose", "compose"]),
    ("helm", &["helm charts"]),
    ("istio", &["istio service mesh"]),
    ("podman", &["pod man"]),
    // CI/CD
    ("jenkins", &["jenkins ci", "jenkinsfile"]),
    ("gitlab ci", &["gitlab-ci", "gitlab cicd", "gitlab"]),
    ("github actions", &["gh actions", "github-actions"]),
    ("circleci", &["circle ci", "circle-ci"]),
    ("travis ci", &["travisci", "travis"]),
    ("azure devops", &["azure pipelines", "ado"]),
    ("teamcity", &["team city"]),
    ("bamboo", &["atlassian bamboo"]),
    ("argocd", &["argo cd", "argo-cd"]),
    // Infrastructure as code
    ("terraform", &["tf", "hashicorp terraform"]),
    ("ansible", &["ansible playbook"]),
    ("puppet", &["puppet enterprise"]),
    ("chef", &["chef infra"]),
    (
        "cloudformation",
        &["cloud formation", "aws cloudformation", "cfn"],
    ),
    ("pulumi", &["pulumi iac"]),
    // Monitoring and observability
    ("prometheus", &["prometheus monitoring"]),
    ("grafana", &["grafana dashboard"]),
    ("datadog", &["data dog"]),
    ("new relic", &["newrelic"]),
    ("splunk", &["splunk enterprise"]),
    ("elk stack", &["elk", "elastic stack"]),
    ("jaeger", &["jaeger tracing"]),
    ("kibana", &["kibana dashboard"]),
    // Message queues
    ("kafka", &["apache kafka", "confluent kafka"]),
    ("rabbitmq", &["rabbit mq", "rabbit"]),
    ("sqs", &["aws sqs", "amazon sqs"]),
    ("activemq", &["active mq", "apache activemq"]),
    ("redis pub/sub", &["redis pubsub", "redis queue"]),
    // API styles
    ("rest", &["restful", "rest api", "restful api"]),
    ("graphql", &["graph ql"]),
    ("grpc", &["g-rpc", "google rpc"]),
    ("soap", &["soap api", "soap services"]),
    ("websocket", &["websockets", "ws", "socket.io"]),
    // Testing
    ("junit", &["junit5", "junit4"]),
    ("jest", &["jestjs"]),
    ("pytest", &["py.test"]),
    ("selenium", &["selenium webdriver"]),
    ("cypress", &["cypress.io"]),
    ("playwright", &["ms playwright"]),
    ("mocha", &["mochajs"]),
    ("testng", &["test ng"]),
    // Methodologies
    ("agile", &["agile methodology", "agile development"]),
    ("scrum", &["scrum master", "scrum methodology"]),
    ("kanban", &["kanban board"]),
    (
        "safe",
        &["scaled agile", "safe framework", "scaled agile framework"],
    ),
    ("devops", &["dev ops", "devops culture"]),
    (
        "ci/cd",
        &["cicd", "ci cd", "continuous integration", "continuous deployment"],
    ),
    ("tdd", &["test driven development", "test-driven development"]),
    (
        "bdd",
        &["behavior driven development", "behaviour driven development"],
    ),
    ("waterfall", &["waterfall methodology"]),
    // Project management tools
    ("jira", &["atlassian jira"]),
    ("confluence", &["atlassian confluence"]),
    ("trello", &["trello board"]),
    ("asana", &["asana project"]),
    ("monday", &["monday.com"]),
    ("azure boards", &["azure devops boards"]),
    // Version control
    ("git", &["git version control", "gitflow"]),
    ("github", &["git hub"]),
    ("bitbucket", &["bit bucket", "atlassian bitbucket"]),
    ("gitlab", &["git lab"]),
    ("svn", &["subversion", "apache subversion"]),
    // Machine learning and AI
    ("tensorflow", &["tensor flow", "tf", "tensorflow2"]),
    ("pytorch", &["py torch", "torch"]),
    ("scikit-learn", &["sklearn", "scikit learn"]),
    ("keras", &["tf keras"]),
    ("opencv", &["open cv", "cv2"]),
    ("nlp", &["natural language processing"]),
    ("ml", &["machine learning"]),
    ("ai", &["artificial intelligence"]),
    ("llm", &["large language model", "large language models"]),
    // Data engineering
    ("spark", &["apache spark", "pyspark"]),
    ("hadoop", &["apache hadoop", "hdfs"]),
    ("airflow", &["apache airflow"]),
    ("dbt", &["data build tool"]),
    ("snowflake", &["snowflake db"]),
    ("databricks", &["data bricks"]),
    ("etl", &["extract transform load"]),
    // Security
    ("oauth", &["oauth2", "oauth 2.0"]),
    ("jwt", &["json web token", "json web tokens"]),
    ("ssl/tls", &["ssl", "tls", "https"]),
    ("owasp", &["owasp top 10"]),
    ("penetration testing", &["pen testing", "pentesting"]),
    ("sso", &["single sign on", "single sign-on"]),
    // Architecture styles
    (
        "microservices",
        &["micro services", "micro-services", "microservice architecture"],
    ),
    ("serverless", &["faas", "function as a service"]),
    ("event-driven", &["event driven", "eda", "event-driven architecture"]),
    ("soa", &["service oriented architecture"]),
    ("domain-driven design", &["ddd", "domain driven design"]),
    ("clean architecture", &["hexagonal architecture", "ports and adapters"]),
];
