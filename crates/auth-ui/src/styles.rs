//! Centralized style constants for the auth form components

// Card and page layout
pub const CARD: &str = "w-full max-w-md p-8 bg-white rounded-lg shadow-md";
pub const PAGE_SHELL: &str =
    "min-h-screen bg-gray-50 flex items-center justify-center py-12 px-4 sm:px-6 lg:px-8";

// Text
pub const HEADING: &str = "text-2xl font-bold ml-2";
pub const LABEL: &str = "block text-sm font-medium text-gray-700";
pub const FOOTER_TEXT: &str = "text-center text-sm text-gray-600";
pub const FOOTER_LINK: &str = "text-blue-600 hover:underline";
pub const DIVIDER_TEXT: &str = "text-gray-500";

// Inputs
pub const INPUT: &str = "mt-1 block w-full px-3 py-2 border border-gray-300 rounded-md";

// Buttons
pub const SUBMIT_BUTTON: &str =
    "w-full py-2 px-4 bg-blue-600 text-white rounded-md hover:bg-blue-700";
pub const SOCIAL_BUTTON: &str =
    "flex-1 py-2 px-4 border border-gray-300 rounded-md flex items-center justify-center";

// Dividers
pub const DIVIDER_RULE: &str = "w-full border-gray-300";
