/// A group of canned questions on the home view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub questions: [&'static str; 3],
}

pub const CATEGORIES: [SuggestionCategory; 3] = [
    SuggestionCategory {
        title: "Growth",
        icon: "/Assets/Growth.png",
        questions: [
            "How is the overall loan and leasing growth of the company during FY2024",
            "What are the factors that affected growth during the year",
            "What is the growth outlook for the next year",
        ],
    },
    SuggestionCategory {
        title: "Profitability",
        icon: "/Assets/Profitability.png",
        questions: [
            "What is the Net Interest Margin in FY2024",
            "What is the ROE in FY2024 and how does it compare to the previous year",
            "How is the dividend payout of the company in FY2024",
        ],
    },
    SuggestionCategory {
        title: "Asset Quality",
        icon: "/Assets/Asset Quality.png",
        questions: [
            "What is the overall asset quality of the company",
            "What is the NPL ratio in FY2024",
            "How has asset quality changed over the past year",
        ],
    },
];
