//! Fixed sample corpus searched by the simulated index.

#[derive(Debug, Clone, Copy)]
pub struct CorpusDocument {
    pub id: &'static str,
    pub title: &'static str,
    pub abstract_text: &'static str,
    pub keywords: &'static [&'static str],
    pub authors: &'static [&'static str],
    pub publication_date: &'static str,
}

pub static SAMPLE_CORPUS: [CorpusDocument; 5] = [
    CorpusDocument {
        id: "paper_001",
        title: "The Future of Decentralized Research Funding",
        abstract_text: "Exploring novel mechanisms for funding scientific research using decentralized autonomous organizations (DAOs) and tokenomics. We propose a new model...",
        keywords: &["decentralized science", "funding", "dao"],
        authors: &["Dr. Alice Wonderland"],
        publication_date: "2024-01-15",
    },
    CorpusDocument {
        id: "paper_002",
        title: "Blockchain Applications in Scientific Data Management",
        abstract_text: "This study reviews the current applications of blockchain technology for ensuring the integrity and provenance of scientific data. Challenges and opportunities are discussed...",
        keywords: &["blockchain", "scientific data", "integrity"],
        authors: &["Dr. Bob The Builder"],
        publication_date: "2023-11-20",
    },
    CorpusDocument {
        id: "paper_003",
        title: "AI-Powered Literature Review for Medical Research",
        abstract_text: "We present an AI tool that automates parts of the literature review process for medical researchers, using natural language processing and machine learning to identify relevant studies.",
        keywords: &["ai", "literature review", "medical research"],
        authors: &["Dr. Carol Danvers"],
        publication_date: "2024-03-01",
    },
    CorpusDocument {
        id: "paper_004",
        title: "NFTs for Intellectual Property in Science",
        abstract_text: "This paper investigates the potential of Non-Fungible Tokens (NFTs) as a means to manage and transfer intellectual property rights for scientific discoveries and research outputs.",
        keywords: &["nft", "intellectual property", "science"],
        authors: &["Dr. David Copperfield"],
        publication_date: "2023-09-05",
    },
    CorpusDocument {
        id: "paper_005",
        title: "Tokenizing Research: A New Paradigm for DeSci",
        abstract_text: "We delve into the concept of tokenizing research assets, including papers, data, and IP, to create new economic models within the decentralized science ecosystem.",
        keywords: &["desci", "tokenization", "research assets"],
        authors: &["Dr. Eve Adams"],
        publication_date: "2024-05-01",
    },
];
