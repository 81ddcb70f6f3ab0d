//! Fixed suggestion chips offered next to the tag inputs.

pub const SKILL_PRESETS: &[&str] = &[
    "Python",
    "SQL",
    "Statistics",
    "Experimentation",
    "Data Visualization",
    "Prompt Engineering",
    "Distributed Training",
    "Feature Engineering",
    "Model Deployment",
    "A/B Testing",
];

pub const TOOL_PRESETS: &[&str] = &[
    "PyTorch",
    "TensorFlow",
    "Keras",
    "scikit-learn",
    "Hugging Face",
    "LangChain",
    "Ray",
    "MLflow",
    "Airflow",
    "Docker",
    "Kubernetes",
];

pub const DOMAIN_PRESETS: &[&str] = &[
    "NLP",
    "Computer Vision",
    "MLOps",
    "Generative AI",
    "Recommendation Systems",
    "Reinforcement Learning",
    "Time Series",
    "Optimization",
    "LLMs",
    "Data Engineering",
];
