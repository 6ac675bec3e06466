//! Heuristic vocabularies, kept as data so tests stay table-driven and new
//! technologies land without touching control flow.
//!
//! Path fragments match case-sensitively as written (`Dockerfile` keeps its
//! capital D); content hints match against a single lowercased concatenation
//! of all file contents.

/// Path fragments that count a file toward the frontend bucket.
pub(crate) const FRONTEND_PATH_HINTS: &[&str] =
    &["src/components", "pages/", ".tsx", ".vue", ".svelte"];

/// Path fragments that count a file toward the backend bucket.
pub(crate) const BACKEND_PATH_HINTS: &[&str] =
    &["api/", "server/", "routes/", "controllers/", "models/"];

/// Path fragments that count a file toward the database bucket.
pub(crate) const DATABASE_PATH_HINTS: &[&str] =
    &["migrations/", "schema", ".sql", "database/"];

/// Path fragments that count a file toward the devops bucket. Note that a
/// bare `.yml` qualifies; over-classification of yml-heavy repos is known
/// and kept for parity.
pub(crate) const DEVOPS_PATH_HINTS: &[&str] =
    &["Dockerfile", "docker-compose", ".yml", "k8s/", ".github/workflows/"];

/// Content hints that classify an otherwise-unbucketed project as design.
pub(crate) const DESIGN_CONTENT_HINTS: &[&str] = &["design", "ui", "ux"];

/// Language tags derived from file suffixes.
pub(crate) const LANGUAGE_SUFFIXES: &[(&[&str], &str)] = &[
    (&[".ts", ".tsx"], "TypeScript"),
    (&[".js", ".jsx"], "JavaScript"),
    (&[".py"], "Python"),
    (&[".go"], "Go"),
    (&[".rs"], "Rust"),
];

/// Technology names derived from content substrings. Any needle firing adds
/// the canonical name once.
pub(crate) const TECHNOLOGY_CONTENT_HINTS: &[(&[&str], &str)] = &[
    (&["react"], "React"),
    (&["vue"], "Vue"),
    (&["svelte"], "Svelte"),
    (&["angular"], "Angular"),
    (&["express"], "Express"),
    (&["fastify"], "Fastify"),
    (&["next"], "Next.js"),
    (&["nuxt"], "Nuxt"),
    (&["postgresql", "postgres"], "PostgreSQL"),
    (&["mysql"], "MySQL"),
    (&["mongodb"], "MongoDB"),
    (&["redis"], "Redis"),
];

/// Framework names; independent vocabulary from the technology hints.
pub(crate) const FRAMEWORK_CONTENT_HINTS: &[(&[&str], &str)] = &[
    (&["remix"], "Remix"),
    (&["nextjs", "next.js"], "Next.js"),
    (&["nuxtjs", "nuxt.js"], "Nuxt.js"),
    (&["sveltekit"], "SvelteKit"),
    (&["astro"], "Astro"),
    (&["gatsby"], "Gatsby"),
    (&["fastapi"], "FastAPI"),
    (&["django"], "Django"),
    (&["flask"], "Flask"),
    (&["gin"], "Gin"),
    (&["echo"], "Echo"),
];

/// Path fragments marking test files.
pub(crate) const TEST_PATH_HINTS: &[&str] = &["test", "spec", "__tests__"];

/// Path suffixes marking test files.
pub(crate) const TEST_PATH_SUFFIXES: &[&str] =
    &[".test.ts", ".test.js", ".spec.ts", ".spec.js"];

/// Path fragments marking database work.
pub(crate) const DATABASE_FEATURE_PATH_HINTS: &[&str] = &["migration", "schema"];

/// Content hints marking database work. The bare `db` is extremely broad
/// and a likely upstream defect; kept for parity, do not narrow.
pub(crate) const DATABASE_FEATURE_CONTENT_HINTS: &[&str] = &["database", "db"];

/// Path fragments marking container tooling.
pub(crate) const DOCKER_PATH_HINTS: &[&str] =
    &["Dockerfile", "docker-compose", ".dockerignore"];

/// Path fragments marking CI configuration.
pub(crate) const CI_PATH_HINTS: &[&str] =
    &[".github/workflows/", ".gitlab-ci.yml", "jenkins", "circleci"];

/// Cap on the raw concatenated content scanned for substring heuristics.
/// The heuristics tolerate partial content; anything past the cap is dropped
/// at a char boundary.
pub(crate) const MAX_SCAN_BYTES: usize = 4 * 1024 * 1024;
