//! # Catalog Data Module
//!
//! The built-in multilingual catalog and the fixed token tables the classifier
//! and quantity scaler consult. Keywords cover English, Traditional Chinese
//! (including Cantonese usage) and Simplified Chinese.

use crate::catalog_model::{Catalog, CategoryTag, SubcategoryEntry};
use crate::localization::Locale;
use lazy_static::lazy_static;
use std::sync::Arc;

/// Subcategories that scale with household size under the Basic policy
pub const DEFAULT_AUTO_SCALE_KEYS: &[&str] = &["Meat", "Seafood", "Fruits & Vegetables"];

/// Short culture-specific tokens that pin a category on their own.
/// Checked before any keyword matching; longer tokens are tried first.
pub const SPECIAL_TOKENS: &[(&str, CategoryTag)] = &[
    ("toiletries", CategoryTag::Household),
    ("groceries", CategoryTag::Food),
    ("grocery", CategoryTag::Food),
    ("日用品", CategoryTag::Household),
    ("餸菜", CategoryTag::Food),
    ("買餸", CategoryTag::Food),
    ("买菜", CategoryTag::Food),
    ("廁紙", CategoryTag::Household),
    ("厕纸", CategoryTag::Household),
    ("紙品", CategoryTag::Household),
    ("纸品", CategoryTag::Household),
    // Single characters only when no word of the other category uses them
    ("餸", CategoryTag::Food),
    ("梘", CategoryTag::Household),
];

/// Generic household nouns; a hit maps to the first specific Household subcategory
pub const GENERIC_HOUSEHOLD_TERMS: &[&str] = &[
    // English
    "tool", "furniture", "appliance", "storage", "container", "utensil", "equipment",
    "decor", // Traditional Chinese
    "工具", "傢俬", "傢具", "家具", "電器", "收納", "器具", "用具", "家品",
    // Simplified Chinese
    "家私", "电器", "收纳",
];

fn entry(key: &str, zh_hant: &str, zh_hans: &str, days: u32) -> SubcategoryEntry {
    SubcategoryEntry::new(key, days)
        .with_label(Locale::ZhHant, zh_hant)
        .with_label(Locale::ZhHans, zh_hans)
}

fn food_subcategories() -> Vec<SubcategoryEntry> {
    vec![
        entry("Fruits & Vegetables", "蔬果", "蔬果", 7).with_keywords(&[
            "fruit", "fruits", "vegetable", "vegetables", "veggies", "apple", "apples",
            "banana", "bananas", "orange", "oranges", "grape", "grapes", "strawberry",
            "strawberries", "lemon", "lemons", "mango", "pear", "pears", "watermelon",
            "tomato", "tomatoes", "potato", "potatoes", "onion", "onions", "carrot",
            "carrots", "lettuce", "cabbage", "spinach", "broccoli", "cucumber", "eggplant",
            "garlic", "mushroom", "mushrooms", "avocado", "tofu",
            "水果", "蔬菜", "蘋果", "苹果", "香蕉", "橙", "橙子", "葡萄", "士多啤梨", "草莓",
            "檸檬", "柠檬", "芒果", "西瓜", "番茄", "西紅柿", "西红柿", "薯仔", "馬鈴薯",
            "马铃薯", "土豆", "洋蔥", "洋葱", "紅蘿蔔", "红萝卜", "胡蘿蔔", "胡萝卜", "生菜",
            "椰菜", "白菜", "菠菜", "西蘭花", "西兰花", "青瓜", "黃瓜", "黄瓜", "茄子", "蒜頭",
            "大蒜", "蘑菇", "豆腐",
        ]),
        entry("Meat", "肉類", "肉类", 3).with_keywords(&[
            "meat", "beef", "pork", "chicken", "lamb", "mutton", "steak", "bacon", "ham",
            "sausage", "sausages", "mince", "turkey", "duck",
            "牛肉", "豬肉", "猪肉", "雞肉", "鸡肉", "雞翼", "鸡翅", "羊肉", "牛扒", "牛排",
            "豬扒", "猪排", "煙肉", "烟肉", "培根", "火腿", "香腸", "香肠", "肉碎", "肉末",
            "雞", "鸡", "鴨", "鸭",
        ]),
        entry("Seafood", "海鮮", "海鲜", 2).with_keywords(&[
            "seafood", "fish", "salmon", "tuna", "cod", "shrimp", "shrimps", "prawn",
            "prawns", "crab", "lobster", "oyster", "oysters", "squid", "clam", "clams",
            "mussels",
            "海鮮", "海鲜", "魚", "鱼", "三文魚", "三文鱼", "吞拿魚", "金枪鱼", "鱈魚", "鳕鱼",
            "蝦", "虾", "蟹", "龍蝦", "龙虾", "蠔", "生蠔", "生蚝", "魷魚", "鱿鱼", "蜆", "蚬",
            "青口",
        ]),
        entry("Frozen Food", "急凍食品", "冷冻食品", 90).with_keywords(&[
            "frozen", "ice cream", "ice cubes", "dumpling", "dumplings", "popsicle",
            "急凍", "冷凍", "冷冻", "雪糕", "冰淇淋", "雪條", "餃子", "饺子", "水餃", "水饺",
        ]),
        entry("Dairy & Eggs", "奶類及蛋", "奶类及蛋", 7).with_keywords(&[
            "milk", "cheese", "yogurt", "yoghurt", "butter", "cream", "egg", "eggs",
            "牛奶", "鮮奶", "鲜奶", "芝士", "起司", "奶酪", "乳酪", "酸奶", "牛油", "黃油",
            "黄油", "忌廉", "奶油", "雞蛋", "鸡蛋", "蛋",
        ]),
        entry("Bakery", "麵包糕點", "面包糕点", 3).with_keywords(&[
            "bread", "toast", "bagel", "croissant", "bun", "buns", "cake", "muffin",
            "baguette",
            "麵包", "面包", "多士", "吐司", "蛋糕", "餐包", "牛角包", "菠蘿包", "菠萝包",
        ]),
        entry("Grains & Pasta", "米麵雜糧", "米面杂粮", 365).with_keywords(&[
            "rice", "pasta", "noodle", "noodles", "spaghetti", "macaroni", "flour", "oats",
            "oatmeal", "cereal", "quinoa",
            "白米", "大米", "米", "麵", "麵條", "面条", "意粉", "意面", "通粉", "麵粉", "面粉",
            "燕麥", "燕麦", "麥片", "麦片", "即食麵", "公仔麵", "方便面",
        ]),
        entry("Canned & Dry Goods", "罐頭乾貨", "罐头干货", 730).with_keywords(&[
            "canned", "beans", "lentils", "chickpeas", "soup", "dried",
            "罐頭", "罐头", "乾貨", "干货", "紅豆", "红豆", "綠豆", "绿豆", "湯", "汤",
        ]),
        entry("Condiments & Sauces", "調味料", "调味料", 365).with_keywords(&[
            "sauce", "ketchup", "mayonnaise", "mayo", "mustard", "soy sauce", "vinegar",
            "oil", "olive oil", "salt", "sugar", "pepper", "honey", "jam",
            "醬油", "酱油", "豉油", "生抽", "老抽", "醬", "酱", "醋", "油", "鹽", "盐", "糖",
            "胡椒", "茄汁", "番茄醬", "番茄酱", "蜜糖", "蜂蜜", "果醬", "果酱", "橄欖油",
            "橄榄油",
        ]),
        entry("Snacks", "零食", "零食", 90).with_keywords(&[
            "snack", "snacks", "chips", "crisps", "cookie", "cookies", "biscuit", "biscuits",
            "chocolate", "candy", "popcorn", "nuts", "crackers",
            "零食", "薯片", "餅乾", "饼干", "曲奇", "朱古力", "巧克力", "糖果", "爆谷", "爆米花",
            "果仁", "堅果", "坚果",
        ]),
        entry("Beverages", "飲品", "饮品", 365).with_keywords(&[
            "water", "juice", "soda", "coke", "coffee", "tea", "beer", "wine", "drink",
            "drinks", "lemonade",
            "水", "礦泉水", "矿泉水", "蒸餾水", "蒸馏水", "果汁", "橙汁", "汽水", "可樂", "可乐",
            "咖啡", "茶", "奶茶", "啤酒", "紅酒", "红酒", "飲品", "饮品",
        ]),
        entry("Other Food", "其他食品", "其他食品", 30).catch_all(),
    ]
}

fn household_subcategories() -> Vec<SubcategoryEntry> {
    vec![
        entry("Cleaning Supplies", "清潔用品", "清洁用品", 730).with_keywords(&[
            "detergent", "laundry detergent", "bleach", "soap", "dish soap", "cleaner",
            "sponge", "sponges", "disinfectant", "wipes", "softener",
            "洗潔精", "洗洁精", "洗衣粉", "洗衣液", "漂白水", "漂白剂", "番梘", "肥皂", "香皂",
            "清潔劑", "清洁剂", "消毒液", "海綿", "海绵", "柔順劑", "柔顺剂",
        ]),
        entry("Paper Products", "紙品", "纸品", 1095).with_keywords(&[
            "toilet paper", "tissue", "tissues", "paper towel", "paper towels", "napkin",
            "napkins", "kitchen roll",
            "廁紙", "厕纸", "衛生紙", "卫生纸", "紙巾", "纸巾", "廚房紙", "厨房纸", "紙品",
            "纸品",
        ]),
        entry("Personal Care", "個人護理", "个人护理", 730).with_keywords(&[
            "shampoo", "conditioner", "toothpaste", "toothbrush", "body wash", "deodorant",
            "lotion", "razor", "sunscreen", "floss",
            "洗頭水", "洗发水", "護髮素", "护发素", "牙膏", "牙刷", "沐浴露", "潤膚露", "润肤露",
            "剃刀", "防曬", "防晒",
        ]),
        entry("Kitchen Supplies", "廚房用品", "厨房用品", 1095).with_keywords(&[
            "aluminum foil", "foil", "cling wrap", "plastic wrap", "trash bag", "trash bags",
            "garbage bag", "garbage bags", "ziplock", "rice cooker",
            "錫紙", "锡纸", "保鮮紙", "保鲜膜", "垃圾袋", "膠袋", "胶袋", "保鮮袋", "保鲜袋",
        ]),
        entry("Tools & Hardware", "工具五金", "工具五金", 1825).with_keywords(&[
            "hammer", "screwdriver", "drill", "wrench", "battery", "batteries", "light bulb",
            "bulb", "tape", "screws", "nails",
            "鎚子", "锤子", "螺絲批", "螺丝刀", "電池", "电池", "燈泡", "灯泡", "膠紙", "胶带",
            "螺絲", "螺丝",
        ]),
        entry("Other Household", "其他家居用品", "其他家居用品", 365).catch_all(),
    ]
}

lazy_static! {
    /// Process-wide built-in catalog, constructed (and validated) on first use
    pub static ref BUILTIN_CATALOG: Arc<Catalog> = Arc::new(Catalog::new(vec![
        (CategoryTag::Food, food_subcategories()),
        (CategoryTag::Household, household_subcategories()),
    ]));
}
